//! Test doubles for the injected collaborators.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bytes::Bytes;

use crate::auth::{IdentityError, IdentityProvider};
use crate::llm_client::{LlmError, TextGenerator};
use crate::models::interview::{DifficultyLevel, InterviewRequest};
use crate::models::user::User;
use crate::resumes::storage::{ResumeStorage, StorageError};
use crate::state::AppState;
use crate::store::InMemoryStore;

/// A JSON array of `n` distinct question strings.
pub fn questions_json(n: usize) -> String {
    let questions: Vec<String> = (1..=n)
        .map(|i| format!("Question {i}: tell me about a project you are proud of"))
        .collect();
    serde_json::to_string(&questions).unwrap()
}

pub fn sample_request() -> InterviewRequest {
    InterviewRequest {
        job_title: "Backend Engineer".to_string(),
        company_name: "Acme".to_string(),
        job_description: "Design, build and operate the HTTP services behind our checkout flow."
            .to_string(),
        number_of_questions: 5,
        difficulty_level: DifficultyLevel::Beginner,
        resume_content: "Three years of Rust and Go services in production.".to_string(),
        user_id: "u1".to_string(),
    }
}

/// Replies with a fixed text, or fails with a given error on the first call.
pub struct ScriptedGenerator {
    reply: String,
    failure: Mutex<Option<LlmError>>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            failure: Mutex::new(None),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(error: LlmError) -> Self {
        Self {
            reply: String::new(),
            failure: Mutex::new(Some(error)),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate_text(&self, _prompt: &str) -> Result<String, LlmError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.failure.lock().unwrap().take() {
            return Err(error);
        }
        Ok(self.reply.clone())
    }
}

/// Sessions held in a map instead of Redis.
#[derive(Default)]
pub struct StaticIdentityProvider {
    sessions: Mutex<HashMap<String, User>>,
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn current_user(&self, session_token: &str) -> Result<Option<User>, IdentityError> {
        Ok(self.sessions.lock().unwrap().get(session_token).cloned())
    }
}

/// Object storage held in memory.
#[derive(Default)]
pub struct MemoryResumeStorage {
    objects: Mutex<HashMap<String, Bytes>>,
}

impl MemoryResumeStorage {
    pub fn object(&self, key: &str) -> Option<Bytes> {
        self.objects.lock().unwrap().get(key).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.lock().unwrap().is_empty()
    }
}

#[async_trait]
impl ResumeStorage for MemoryResumeStorage {
    async fn put(&self, key: &str, data: Bytes, _content_type: &str) -> Result<(), StorageError> {
        self.objects.lock().unwrap().insert(key.to_string(), data);
        Ok(())
    }
}

/// Concrete handles to every collaborator, for assertions after a request.
pub struct TestHarness {
    pub store: Arc<InMemoryStore>,
    pub llm: Arc<ScriptedGenerator>,
    pub identity: Arc<StaticIdentityProvider>,
    pub resumes: Arc<MemoryResumeStorage>,
}

impl TestHarness {
    pub fn new(llm: ScriptedGenerator) -> Self {
        Self {
            store: Arc::new(InMemoryStore::new()),
            llm: Arc::new(llm),
            identity: Arc::new(StaticIdentityProvider::default()),
            resumes: Arc::new(MemoryResumeStorage::default()),
        }
    }

    pub fn state(&self) -> AppState {
        AppState {
            store: self.store.clone(),
            llm: self.llm.clone(),
            identity: self.identity.clone(),
            resumes: self.resumes.clone(),
        }
    }

    /// Registers a session for `user_id` and returns its token.
    pub fn sign_in(&self, user_id: &str) -> String {
        let token = format!("token-{user_id}");
        self.identity.sessions.lock().unwrap().insert(
            token.clone(),
            User {
                id: user_id.to_string(),
                name: format!("User {user_id}"),
                email: format!("{user_id}@example.com"),
            },
        );
        token
    }
}

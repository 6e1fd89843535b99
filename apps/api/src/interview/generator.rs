//! Custom Interview Generation — orchestrates the full pipeline for one request.
//!
//! Flow: validate request → build prompt → LLM generate → parse questions →
//!       build record → persist → return id.
//!
//! Any failure short-circuits. Nothing is written unless the questions validated.

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::interview::prompts::build_question_prompt;
use crate::interview::record::{build_record, write_interview};
use crate::interview::validation::parse_questions;
use crate::llm_client::TextGenerator;
use crate::models::interview::{InterviewRequest, QUESTION_COUNT_RANGE};
use crate::store::DocumentStore;

const MIN_JOB_TITLE_CHARS: usize = 2;
const MIN_COMPANY_NAME_CHARS: usize = 2;
const MIN_JOB_DESCRIPTION_CHARS: usize = 50;

/// Checks request fields before anything is sent to the model.
pub fn validate_request(request: &InterviewRequest) -> Result<(), AppError> {
    if request.job_title.trim().chars().count() < MIN_JOB_TITLE_CHARS {
        return Err(AppError::Validation(
            "Job title must be at least 2 characters".to_string(),
        ));
    }
    if request.company_name.trim().chars().count() < MIN_COMPANY_NAME_CHARS {
        return Err(AppError::Validation(
            "Company name must be at least 2 characters".to_string(),
        ));
    }
    if request.job_description.trim().chars().count() < MIN_JOB_DESCRIPTION_CHARS {
        return Err(AppError::Validation(
            "Job description must be at least 50 characters".to_string(),
        ));
    }
    if !QUESTION_COUNT_RANGE.contains(&request.number_of_questions) {
        return Err(AppError::Validation(format!(
            "numberOfQuestions must be between {} and {}",
            QUESTION_COUNT_RANGE.start(),
            QUESTION_COUNT_RANGE.end()
        )));
    }
    if request.resume_content.trim().is_empty() {
        return Err(AppError::Validation(
            "resumeContent cannot be empty".to_string(),
        ));
    }
    if request.user_id.trim().is_empty() {
        return Err(AppError::Validation("userId cannot be empty".to_string()));
    }
    Ok(())
}

/// Runs the custom interview pipeline and returns the stored interview id.
///
/// Steps:
/// 1. validate_request()
/// 2. build_question_prompt()
/// 3. llm.generate_text() (single attempt)
/// 4. parse_questions() → exactly `numberOfQuestions` strings
/// 5. build_record() + write_interview()
pub async fn generate_custom_interview(
    store: &dyn DocumentStore,
    llm: &dyn TextGenerator,
    request: InterviewRequest,
) -> Result<String, AppError> {
    validate_request(&request)?;
    info!(
        "Generating {} {} questions for user {} ({} at {})",
        request.number_of_questions,
        request.difficulty_level,
        request.user_id,
        request.job_title,
        request.company_name
    );

    let prompt = build_question_prompt(&request);
    debug!("Prompt built ({} chars)", prompt.len());

    let raw = llm.generate_text(&prompt).await.map_err(|e| {
        warn!("Question generation call failed for user {}: {e}", request.user_id);
        e
    })?;
    debug!("Model responded ({} chars)", raw.len());

    let questions =
        parse_questions(&raw, request.number_of_questions as usize).map_err(|e| {
            warn!(
                "Discarding model output for user {}: {e}",
                request.user_id
            );
            e
        })?;

    let record = build_record(&request, questions, Utc::now());
    let interview_id = write_interview(store, &record).await?;

    info!(
        "Custom interview {} ready for user {}",
        interview_id, request.user_id
    );
    Ok(interview_id)
}

//! Document Store — collection/document persistence behind a trait.
//!
//! `PgDocumentStore` keeps each document as a JSONB row in the `documents` table.
//! `InMemoryStore` serves local development (no `DATABASE_URL`) and tests.
//!
//! `AppState` holds an `Arc<dyn DocumentStore>`, chosen at startup.

pub mod memory;
pub mod postgres;

pub use memory::InMemoryStore;
pub use postgres::PgDocumentStore;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Document must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// A stored document: store-assigned id plus its JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: String,
    pub data: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    NotEq,
}

/// A single field comparison. `field` names a top-level key of the document body.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub op: FilterOp,
    pub value: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// Filter/order/limit over one collection. All filters must match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filters: Vec<Filter>,
    pub order_by: Option<(String, Direction)>,
    pub limit: Option<usize>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn where_eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filters.push(Filter {
            field: field.to_string(),
            op: FilterOp::Eq,
            value: value.into(),
        });
        self
    }

    pub fn where_ne(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filters.push(Filter {
            field: field.to_string(),
            op: FilterOp::NotEq,
            value: value.into(),
        });
        self
    }

    pub fn order_by(mut self, field: &str, direction: Direction) -> Self {
        self.order_by = Some((field.to_string(), direction));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// The document store trait. Implement this to swap backends without touching
/// handlers or the generation pipeline.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Appends `data` to `collection` and returns the new document id.
    /// Never deduplicates: two identical adds produce two documents.
    async fn add(&self, collection: &str, data: Value) -> Result<String, StoreError>;

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>, StoreError>;

    async fn query(&self, collection: &str, query: &Query) -> Result<Vec<Document>, StoreError>;
}

/// Generates a fresh document id.
pub(crate) fn new_document_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

pub(crate) fn ensure_object(data: &Value) -> Result<(), StoreError> {
    match data {
        Value::Object(_) => Ok(()),
        Value::Null => Err(StoreError::NotAnObject("null")),
        Value::Bool(_) => Err(StoreError::NotAnObject("bool")),
        Value::Number(_) => Err(StoreError::NotAnObject("number")),
        Value::String(_) => Err(StoreError::NotAnObject("string")),
        Value::Array(_) => Err(StoreError::NotAnObject("array")),
    }
}

use crate::errors::AppError;
use crate::interview::record::INTERVIEWS_COLLECTION;
use crate::models::interview::Interview;
use crate::store::{Direction, Document, DocumentStore, Query};

pub const DEFAULT_LATEST_LIMIT: usize = 20;
pub const MAX_LATEST_LIMIT: usize = 100;

fn into_interview(doc: Document) -> Result<Interview, AppError> {
    let record = serde_json::from_value(doc.data).map_err(|e| {
        AppError::Internal(anyhow::anyhow!("Malformed interview document {}: {e}", doc.id))
    })?;
    Ok(Interview { id: doc.id, record })
}

pub async fn get_interview_by_id(
    store: &dyn DocumentStore,
    id: &str,
) -> Result<Option<Interview>, AppError> {
    store
        .get(INTERVIEWS_COLLECTION, id)
        .await?
        .map(into_interview)
        .transpose()
}

/// All interviews owned by `user_id`, newest first.
pub async fn get_interviews_by_user(
    store: &dyn DocumentStore,
    user_id: &str,
) -> Result<Vec<Interview>, AppError> {
    let query = Query::new()
        .where_eq("userId", user_id)
        .order_by("createdAt", Direction::Desc);

    store
        .query(INTERVIEWS_COLLECTION, &query)
        .await?
        .into_iter()
        .map(into_interview)
        .collect()
}

/// Finalized interviews owned by anyone except `user_id`, newest first.
pub async fn get_latest_interviews(
    store: &dyn DocumentStore,
    user_id: &str,
    limit: usize,
) -> Result<Vec<Interview>, AppError> {
    let query = Query::new()
        .where_eq("finalized", true)
        .where_ne("userId", user_id)
        .order_by("createdAt", Direction::Desc)
        .limit(limit.min(MAX_LATEST_LIMIT));

    store
        .query(INTERVIEWS_COLLECTION, &query)
        .await?
        .into_iter()
        .map(into_interview)
        .collect()
}

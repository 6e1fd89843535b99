//! Axum route handlers for the Interview API.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::CurrentUser;
use crate::errors::AppError;
use crate::interview::generator::generate_custom_interview;
use crate::interview::queries::{
    get_interview_by_id, get_interviews_by_user, get_latest_interviews, DEFAULT_LATEST_LIMIT,
};
use crate::models::interview::{Interview, InterviewRequest};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateInterviewResponse {
    pub success: bool,
    pub interview_id: String,
}

#[derive(Debug, Serialize)]
pub struct InterviewResponse {
    pub success: bool,
    pub interview: Interview,
}

#[derive(Debug, Serialize)]
pub struct InterviewListResponse {
    pub success: bool,
    pub interviews: Vec<Interview>,
}

#[derive(Debug, Deserialize)]
pub struct LatestQuery {
    pub limit: Option<usize>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/vapi/custom-interview
///
/// Generates questions from resume + JD and stores a finalized interview.
/// Pipeline failures answer 500 with `{success: false, error}`.
pub async fn handle_custom_interview(
    State(state): State<AppState>,
    payload: Result<Json<InterviewRequest>, JsonRejection>,
) -> Result<Json<CreateInterviewResponse>, AppError> {
    let Json(request) = payload?;

    let interview_id =
        generate_custom_interview(state.store.as_ref(), state.llm.as_ref(), request).await?;

    Ok(Json(CreateInterviewResponse {
        success: true,
        interview_id,
    }))
}

/// GET /api/v1/interviews/:id
pub async fn handle_get_interview(
    State(state): State<AppState>,
    Path(interview_id): Path<String>,
) -> Result<Json<InterviewResponse>, AppError> {
    let interview = get_interview_by_id(state.store.as_ref(), &interview_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Interview {interview_id} not found")))?;

    Ok(Json(InterviewResponse {
        success: true,
        interview,
    }))
}

/// GET /api/v1/interviews
///
/// The signed-in user's interviews, newest first.
pub async fn handle_list_my_interviews(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Json<InterviewListResponse>, AppError> {
    let interviews = get_interviews_by_user(state.store.as_ref(), &user.id).await?;
    Ok(Json(InterviewListResponse {
        success: true,
        interviews,
    }))
}

/// GET /api/v1/interviews/latest?limit=N
///
/// Finalized interviews from other users, newest first.
pub async fn handle_latest_interviews(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    params: Result<Query<LatestQuery>, QueryRejection>,
) -> Result<Json<InterviewListResponse>, AppError> {
    let Query(params) = params?;
    let limit = params.limit.unwrap_or(DEFAULT_LATEST_LIMIT);
    let interviews = get_latest_interviews(state.store.as_ref(), &user.id, limit).await?;
    Ok(Json(InterviewListResponse {
        success: true,
        interviews,
    }))
}

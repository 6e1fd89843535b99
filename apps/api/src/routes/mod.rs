pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::interview::handlers as interviews;
use crate::resumes::handlers as resumes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Generation endpoint called by the web client
        .route(
            "/api/vapi/custom-interview",
            post(interviews::handle_custom_interview),
        )
        // Interview reads
        .route(
            "/api/v1/interviews",
            get(interviews::handle_list_my_interviews),
        )
        .route(
            "/api/v1/interviews/latest",
            get(interviews::handle_latest_interviews),
        )
        .route(
            "/api/v1/interviews/:id",
            get(interviews::handle_get_interview),
        )
        // Resume uploads
        .route(
            "/api/v1/resumes",
            post(resumes::handle_upload_resume)
                .layer(DefaultBodyLimit::max(resumes::MAX_RESUME_BYTES)),
        )
        .with_state(state)
}

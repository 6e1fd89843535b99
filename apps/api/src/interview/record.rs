//! Interview Record Writer — assembles the persisted interview and appends it.

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::info;

use crate::interview::covers::random_cover;
use crate::models::interview::{InterviewRecord, InterviewRequest, CUSTOM_INTERVIEW_TYPE};
use crate::store::{DocumentStore, StoreError};

/// Collection holding every interview document.
pub const INTERVIEWS_COLLECTION: &str = "interviews";

/// Builds the record for a validated question set. `created_at` is rendered as
/// ISO-8601 UTC with millisecond precision.
pub fn build_record(
    request: &InterviewRequest,
    questions: Vec<String>,
    created_at: DateTime<Utc>,
) -> InterviewRecord {
    InterviewRecord {
        role: request.job_title.clone(),
        company: request.company_name.clone(),
        interview_type: CUSTOM_INTERVIEW_TYPE.to_string(),
        level: request.difficulty_level.to_string(),
        questions,
        user_id: request.user_id.clone(),
        finalized: true,
        cover_image: random_cover(&mut rand::thread_rng()),
        created_at: created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        techstack: Vec::new(),
    }
}

/// Appends `record` to the interviews collection and returns the new id.
/// No existence check: writing the same record twice stores it twice.
pub async fn write_interview(
    store: &dyn DocumentStore,
    record: &InterviewRecord,
) -> Result<String, StoreError> {
    let data = serde_json::to_value(record)?;
    let id = store.add(INTERVIEWS_COLLECTION, data).await?;

    info!(
        "Stored interview {} ({} questions) for user {}",
        id,
        record.questions.len(),
        record.user_id
    );

    Ok(id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::covers::INTERVIEW_COVERS;
    use crate::models::interview::DifficultyLevel;
    use crate::store::InMemoryStore;
    use chrono::TimeZone;

    fn request() -> InterviewRequest {
        InterviewRequest {
            job_title: "Data Engineer".to_string(),
            company_name: "Globex".to_string(),
            job_description: "Pipelines".to_string(),
            number_of_questions: 5,
            difficulty_level: DifficultyLevel::Advanced,
            resume_content: "resume".to_string(),
            user_id: "u7".to_string(),
        }
    }

    fn questions() -> Vec<String> {
        (1..=5).map(|i| format!("Question {i}")).collect()
    }

    #[test]
    fn test_build_record_fills_fixed_fields() {
        let created_at = Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap();
        let record = build_record(&request(), questions(), created_at);

        assert_eq!(record.role, "Data Engineer");
        assert_eq!(record.company, "Globex");
        assert_eq!(record.interview_type, "Custom Interview");
        assert_eq!(record.level, "advanced");
        assert_eq!(record.questions, questions());
        assert_eq!(record.user_id, "u7");
        assert!(record.finalized);
        assert!(record.techstack.is_empty());
        assert_eq!(record.created_at, "2025-06-01T12:30:00.000Z");

        let cover = record.cover_image.strip_prefix("/covers").unwrap();
        assert!(INTERVIEW_COVERS.contains(&cover));
    }

    #[tokio::test]
    async fn test_identical_writes_produce_distinct_ids() {
        let store = InMemoryStore::new();
        let record = build_record(&request(), questions(), Utc::now());

        let first = write_interview(&store, &record).await.unwrap();
        let second = write_interview(&store, &record).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.count(INTERVIEWS_COLLECTION).await, 2);
    }

    #[tokio::test]
    async fn test_written_document_matches_record() {
        let store = InMemoryStore::new();
        let record = build_record(&request(), questions(), Utc::now());

        let id = write_interview(&store, &record).await.unwrap();
        let doc = store.get(INTERVIEWS_COLLECTION, &id).await.unwrap().unwrap();
        let stored: InterviewRecord = serde_json::from_value(doc.data).unwrap();

        assert_eq!(stored, record);
    }
}

use std::fmt;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Allowed values for `numberOfQuestions`.
pub const QUESTION_COUNT_RANGE: RangeInclusive<u32> = 5..=20;

/// Record `type` for interviews produced by the custom-interview pipeline.
pub const CUSTOM_INTERVIEW_TYPE: &str = "Custom Interview";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            DifficultyLevel::Beginner => "beginner",
            DifficultyLevel::Intermediate => "intermediate",
            DifficultyLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request body for custom interview generation. Transient: never persisted as-is.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRequest {
    pub job_title: String,
    pub company_name: String,
    pub job_description: String,
    pub number_of_questions: u32,
    #[serde(default)]
    pub difficulty_level: DifficultyLevel,
    pub resume_content: String,
    pub user_id: String,
}

/// The persisted interview document in the `interviews` collection.
///
/// `level` is kept as a free string on read because the collection also holds
/// interviews created outside this pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewRecord {
    pub role: String,
    pub company: String,
    #[serde(rename = "type")]
    pub interview_type: String,
    pub level: String,
    pub questions: Vec<String>,
    pub user_id: String,
    #[serde(default)]
    pub finalized: bool,
    #[serde(default)]
    pub cover_image: String,
    pub created_at: String,
    #[serde(default)]
    pub techstack: Vec<String>,
}

/// An interview record together with its store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interview {
    pub id: String,
    #[serde(flatten)]
    pub record: InterviewRecord,
}

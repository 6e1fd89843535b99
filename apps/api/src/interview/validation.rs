//! Response Validator — decodes raw model text into exactly N question strings.
//!
//! The whole attempt is rejected on any violation. Nothing is truncated, padded
//! or guessed.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionParseError {
    #[error("response is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("response is not a JSON array")]
    NotAnArray,

    #[error("expected {expected} questions but got {actual}")]
    CountMismatch { expected: usize, actual: usize },

    #[error("question at index {index} is not a string")]
    NonStringElement { index: usize },
}

/// Removes every markdown code-fence marker ("```json", "```", "`") anywhere in
/// the text, then trims.
pub fn strip_code_fences(raw: &str) -> String {
    raw.replace("```json", "")
        .replace("```", "")
        .replace('`', "")
        .trim()
        .to_string()
}

/// Parses model output as a JSON array of exactly `expected` strings.
pub fn parse_questions(raw: &str, expected: usize) -> Result<Vec<String>, QuestionParseError> {
    let cleaned = strip_code_fences(raw);

    let value: Value = serde_json::from_str(&cleaned)
        .map_err(|e| QuestionParseError::InvalidJson(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(QuestionParseError::NotAnArray);
    };

    if items.len() != expected {
        return Err(QuestionParseError::CountMismatch {
            expected,
            actual: items.len(),
        });
    }

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::String(question) => Ok(question),
            _ => Err(QuestionParseError::NonStringElement { index }),
        })
        .collect()
}

//! Question records and the raw Open Trivia DB payload they are built from.

use serde::Deserialize;

/// One entry of the `results` array as returned by the API.
///
/// Text fields may still be percent-encoded. Every field is optional so a
/// sparse record survives deserialization and is handled downstream.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawQuestion {
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

/// Top-level API response body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuestionPayload {
    /// Open Trivia DB status code (0 = success). Informational only.
    #[serde(default)]
    pub response_code: Option<i64>,
    #[serde(default)]
    pub results: Vec<RawQuestion>,
}

/// A decoded, normalized trivia question.
///
/// `difficulty` is lowercase. Missing fields are empty strings; the
/// aggregation layer decides what to do with them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QuestionRecord {
    pub category: String,
    pub difficulty: String,
    pub question: String,
}

impl QuestionRecord {
    pub fn new(
        category: impl Into<String>,
        difficulty: impl Into<String>,
        question: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            difficulty: difficulty.into().to_lowercase(),
            question: question.into(),
        }
    }
}

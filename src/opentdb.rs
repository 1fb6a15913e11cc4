//! Open Trivia DB client.
//!
//! Issues `GET {base}/api.php?amount=N&encode=url3986[&category=ID]` and
//! decodes the `results` array into [`QuestionRecord`]s.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, info};

use crate::decode::decode_records;
use crate::error::{NetworkError, TriviaResult};
use crate::models::{QuestionPayload, QuestionRecord};
use crate::traits::{Headers, HttpClient, QuestionSource};

/// Public Open Trivia DB host.
pub const OPENTDB_BASE_URL: &str = "https://opentdb.com";

/// Client for the Open Trivia DB question endpoint.
#[derive(Clone)]
pub struct OpenTdbClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl OpenTdbClient {
    /// Create a client against `base_url` (no trailing slash needed).
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the request URL for `amount` questions, optionally restricted
    /// to an API category id.
    pub fn questions_url(&self, amount: u32, category: Option<&str>) -> String {
        let mut url = format!("{}/api.php?amount={}&encode=url3986", self.base_url, amount);
        if let Some(category) = category.filter(|c| !c.is_empty()) {
            url.push_str("&category=");
            url.push_str(&urlencoding::encode(category));
        }
        url
    }

    /// Fetch one batch and decode it.
    ///
    /// Non-2xx responses and unparseable bodies are errors. An empty
    /// `results` array is a successful, empty batch.
    pub async fn fetch_quiz_questions(
        &self,
        amount: u32,
        category: Option<&str>,
    ) -> TriviaResult<Vec<QuestionRecord>> {
        let url = self.questions_url(amount, category);
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());

        debug!("GET {}", url);
        let response = self
            .http
            .get(&url, &headers)
            .await
            .map_err(NetworkError::from)?;

        if !response.is_success() {
            return Err(NetworkError::HttpStatus {
                status: response.status,
                message: response.text_lossy(),
            }
            .into());
        }

        let payload: QuestionPayload = response.json()?;
        if let Some(code) = payload.response_code.filter(|code| *code != 0) {
            debug!("API reported response_code {}", code);
        }

        let records = decode_records(&payload.results);
        info!("Fetched {} questions", records.len());
        Ok(records)
    }
}

#[async_trait]
impl QuestionSource for OpenTdbClient {
    async fn fetch_questions(&self, amount: u32) -> TriviaResult<Vec<QuestionRecord>> {
        self.fetch_quiz_questions(amount, None).await
    }
}

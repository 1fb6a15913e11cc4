//! Question source trait abstraction.
//!
//! The data loader only needs "give me N decoded questions". Keeping that
//! behind a trait lets tests drive the loader with scripted completions.

use async_trait::async_trait;

use crate::error::TriviaResult;
use crate::models::QuestionRecord;

#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch and decode `amount` questions.
    ///
    /// An empty vector is a valid result. Errors cover transport and
    /// protocol failures; [`crate::error::NetworkError::Cancelled`] marks an
    /// intentional cancellation.
    async fn fetch_questions(&self, amount: u32) -> TriviaResult<Vec<QuestionRecord>>;
}

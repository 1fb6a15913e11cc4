//! Fetch lifecycle for the question batch.
//!
//! The loader moves between two states, `Loading` and `Ready`. Every load
//! is tagged with a monotonically increasing request id, and a completion
//! only lands if its id is still the newest one issued. Starting a new load
//! or tearing down also aborts the previous task so its connection is
//! released, but correctness rests on the id check alone: a stale
//! completion that slips through is discarded.
//!
//! A failed load never leaves the loader stuck. It ends in `Ready` with an
//! empty batch and [`LOAD_WARNING`], and `retry` is always available.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::app::AppMessage;
use crate::error::{TriviaResult, LOAD_WARNING};
use crate::models::QuestionRecord;
use crate::traits::QuestionSource;

/// Identifier attached to each load.
pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
}

/// Result of a finished fetch, delivered back to the event loop.
#[derive(Debug)]
pub struct LoadCompletion {
    pub request_id: RequestId,
    pub result: TriviaResult<Vec<QuestionRecord>>,
}

/// What [`DataLoader::complete`] did with a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// Questions replaced; carries the batch size
    Loaded(usize),
    /// Load failed; state is `Ready` with a warning
    Failed,
    /// Superseded or torn down; state untouched
    Discarded,
    /// The fetch reported an intentional cancellation; `Ready` without a
    /// warning, previous batch kept
    Cancelled,
}

/// Owns the question snapshot and the load status.
pub struct DataLoader {
    source: Arc<dyn QuestionSource>,
    message_tx: mpsc::UnboundedSender<AppMessage>,
    amount: u32,
    status: LoadStatus,
    warning: Option<String>,
    questions: Arc<[QuestionRecord]>,
    next_request_id: RequestId,
    current_request: Option<RequestId>,
    in_flight: Option<JoinHandle<()>>,
}

impl DataLoader {
    /// Create an idle loader. Nothing is fetched until [`DataLoader::load`].
    pub fn new(
        source: Arc<dyn QuestionSource>,
        message_tx: mpsc::UnboundedSender<AppMessage>,
        amount: u32,
    ) -> Self {
        Self {
            source,
            message_tx,
            amount,
            status: LoadStatus::Loading,
            warning: None,
            questions: Arc::from(Vec::new()),
            next_request_id: 0,
            current_request: None,
            in_flight: None,
        }
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    /// Warning text, only ever set while `Ready`.
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// The current question snapshot. Replaced wholesale on each load.
    pub fn questions(&self) -> &Arc<[QuestionRecord]> {
        &self.questions
    }

    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// Id of the load whose completion would currently be accepted.
    pub fn current_request(&self) -> Option<RequestId> {
        self.current_request
    }

    /// Enter `Loading` and issue a fresh request id.
    ///
    /// Any earlier id stops being current at this point.
    pub fn begin(&mut self) -> RequestId {
        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.current_request = Some(request_id);
        self.status = LoadStatus::Loading;
        self.warning = None;
        request_id
    }

    /// Start fetching `amount` questions in the background.
    ///
    /// Must be called from within a tokio runtime.
    pub fn load(&mut self, amount: u32) -> RequestId {
        self.abort_in_flight();
        self.amount = amount;
        let request_id = self.begin();
        info!("Loading {} trivia questions (request {})", amount, request_id);

        let source = Arc::clone(&self.source);
        let message_tx = self.message_tx.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let result = source.fetch_questions(amount).await;
            // The receiver is gone once the app shuts down
            let _ = message_tx.send(AppMessage::LoadFinished(LoadCompletion {
                request_id,
                result,
            }));
        }));
        request_id
    }

    /// Re-enter `Loading` with the last requested amount.
    pub fn retry(&mut self) -> RequestId {
        self.load(self.amount)
    }

    /// Teardown: the in-flight load, if any, will have no observable effect.
    pub fn cancel(&mut self) {
        if let Some(request_id) = self.current_request.take() {
            debug!("Cancelling request {}", request_id);
        }
        self.abort_in_flight();
    }

    /// Apply a completion if it belongs to the current request.
    pub fn complete(&mut self, completion: LoadCompletion) -> CompletionOutcome {
        let LoadCompletion { request_id, result } = completion;

        if self.current_request != Some(request_id) {
            debug!(
                "Discarding stale completion for request {} (current: {:?})",
                request_id, self.current_request
            );
            return CompletionOutcome::Discarded;
        }

        match result {
            Ok(records) => {
                let count = records.len();
                self.questions = Arc::from(records);
                self.warning = None;
                self.status = LoadStatus::Ready;
                self.in_flight = None;
                info!("Loaded {} trivia questions (request {})", count, request_id);
                CompletionOutcome::Loaded(count)
            }
            Err(err) if err.is_cancellation() => {
                // Not a failure: no warning, and the previous batch stays.
                debug!("Request {} was cancelled", request_id);
                self.current_request = None;
                self.in_flight = None;
                self.status = LoadStatus::Ready;
                CompletionOutcome::Cancelled
            }
            Err(err) => {
                error!(
                    code = err.error_code(),
                    retryable = err.is_retryable(),
                    "Failed to load trivia questions: {}", err
                );
                self.questions = Arc::from(Vec::new());
                self.warning = Some(LOAD_WARNING.to_string());
                self.status = LoadStatus::Ready;
                self.in_flight = None;
                CompletionOutcome::Failed
            }
        }
    }

    fn abort_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}

impl Drop for DataLoader {
    fn drop(&mut self) {
        self.abort_in_flight();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockQuestionSource;
    use crate::error::NetworkError;

    fn loader(source: &MockQuestionSource) -> (DataLoader, mpsc::UnboundedReceiver<AppMessage>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (DataLoader::new(Arc::new(source.clone()), tx, 50), rx)
    }

    fn batch(n: usize) -> Vec<QuestionRecord> {
        (0..n)
            .map(|i| QuestionRecord::new("Science", "easy", format!("Q{}", i)))
            .collect()
    }

    fn transport_error() -> TriviaResult<Vec<QuestionRecord>> {
        Err(NetworkError::ConnectionFailed {
            url: "https://opentdb.test".to_string(),
            message: "refused".to_string(),
        }
        .into())
    }

    async fn next_completion(rx: &mut mpsc::UnboundedReceiver<AppMessage>) -> LoadCompletion {
        match rx.recv().await {
            Some(AppMessage::LoadFinished(completion)) => completion,
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_begin_enters_loading_and_clears_warning() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut loader = DataLoader::new(Arc::new(MockQuestionSource::new()), tx, 50);
        let first = loader.begin();
        loader.complete(LoadCompletion {
            request_id: first,
            result: transport_error(),
        });
        assert_eq!(loader.warning(), Some(LOAD_WARNING));

        let second = loader.begin();
        assert!(second > first);
        assert!(loader.is_loading());
        assert!(loader.warning().is_none());
    }

    #[tokio::test]
    async fn test_successful_load() {
        let source = MockQuestionSource::new();
        source.push(Ok(batch(3)));
        let (mut loader, mut rx) = loader(&source);

        loader.load(3);
        assert_eq!(loader.status(), LoadStatus::Loading);

        let completion = next_completion(&mut rx).await;
        assert_eq!(loader.complete(completion), CompletionOutcome::Loaded(3));
        assert_eq!(loader.status(), LoadStatus::Ready);
        assert_eq!(loader.questions().len(), 3);
        assert!(loader.warning().is_none());
        assert_eq!(source.amounts(), vec![3]);
    }

    #[tokio::test]
    async fn test_empty_batch_is_ready_without_warning() {
        let source = MockQuestionSource::new();
        source.push(Ok(vec![]));
        let (mut loader, mut rx) = loader(&source);

        loader.load(50);
        let completion = next_completion(&mut rx).await;
        assert_eq!(loader.complete(completion), CompletionOutcome::Loaded(0));
        assert_eq!(loader.status(), LoadStatus::Ready);
        assert!(loader.warning().is_none());
    }

    #[tokio::test]
    async fn test_failure_then_retry_recovers() {
        let source = MockQuestionSource::new();
        source.push(Ok(batch(2)));
        source.push(transport_error());
        source.push(Ok(batch(4)));
        let (mut loader, mut rx) = loader(&source);

        loader.load(50);
        loader.complete(next_completion(&mut rx).await);
        assert_eq!(loader.questions().len(), 2);

        loader.retry();
        assert_eq!(loader.complete(next_completion(&mut rx).await), CompletionOutcome::Failed);
        assert_eq!(loader.status(), LoadStatus::Ready);
        assert!(loader.questions().is_empty());
        assert_eq!(loader.warning(), Some(LOAD_WARNING));

        loader.retry();
        assert!(loader.is_loading());
        assert!(loader.warning().is_none());
        assert_eq!(
            loader.complete(next_completion(&mut rx).await),
            CompletionOutcome::Loaded(4)
        );
        assert!(loader.warning().is_none());
        assert_eq!(loader.questions().len(), 4);
        assert_eq!(source.amounts(), vec![50, 50, 50]);
    }

    #[test]
    fn test_stale_completion_is_discarded() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut loader = DataLoader::new(Arc::new(MockQuestionSource::new()), tx, 50);

        let first = loader.begin();
        let second = loader.begin();

        // Out of order: the newer request finishes first.
        assert_eq!(
            loader.complete(LoadCompletion {
                request_id: second,
                result: Ok(batch(2)),
            }),
            CompletionOutcome::Loaded(2)
        );
        assert_eq!(
            loader.complete(LoadCompletion {
                request_id: first,
                result: transport_error(),
            }),
            CompletionOutcome::Discarded
        );
        assert_eq!(loader.questions().len(), 2);
        assert!(loader.warning().is_none());
    }

    #[test]
    fn test_completion_after_cancel_has_no_effect() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut loader = DataLoader::new(Arc::new(MockQuestionSource::new()), tx, 50);

        let request_id = loader.begin();
        loader.cancel();
        assert_eq!(
            loader.complete(LoadCompletion {
                request_id,
                result: Ok(batch(5)),
            }),
            CompletionOutcome::Discarded
        );
        assert!(loader.questions().is_empty());
        assert_eq!(loader.status(), LoadStatus::Loading);
    }

    #[test]
    fn test_cancellation_error_settles_without_warning() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut loader = DataLoader::new(Arc::new(MockQuestionSource::new()), tx, 50);

        let first = loader.begin();
        loader.complete(LoadCompletion {
            request_id: first,
            result: Ok(batch(3)),
        });

        let request_id = loader.begin();
        assert_eq!(
            loader.complete(LoadCompletion {
                request_id,
                result: Err(NetworkError::Cancelled.into()),
            }),
            CompletionOutcome::Cancelled
        );
        assert_eq!(loader.status(), LoadStatus::Ready);
        assert!(loader.current_request().is_none());
        assert!(loader.warning().is_none());
        assert_eq!(loader.questions().len(), 3);

        // A late duplicate for the same id no longer lands
        assert_eq!(
            loader.complete(LoadCompletion {
                request_id,
                result: Ok(batch(9)),
            }),
            CompletionOutcome::Discarded
        );
        assert_eq!(loader.questions().len(), 3);
    }

    #[tokio::test]
    async fn test_superseded_load_never_reports() {
        let source = MockQuestionSource::new();
        let first_gate = source.push_gated(Ok(batch(7)));
        source.push(Ok(batch(1)));
        let (mut loader, mut rx) = loader(&source);

        loader.load(50);
        tokio::task::yield_now().await;
        loader.load(50);

        let completion = next_completion(&mut rx).await;
        assert_eq!(loader.complete(completion), CompletionOutcome::Loaded(1));

        // The first task was aborted; releasing its gate changes nothing.
        let _ = first_gate.send(());
        tokio::task::yield_now().await;
        assert!(rx.try_recv().is_err());
        assert_eq!(loader.questions().len(), 1);
    }
}

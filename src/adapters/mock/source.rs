//! Scripted question source for loader tests.
//!
//! Each call to [`QuestionSource::fetch_questions`] consumes the next
//! scripted outcome. A gated outcome waits until its gate is released,
//! which lets tests complete overlapping loads in any order.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::oneshot;

use crate::error::{NetworkError, TriviaResult};
use crate::models::QuestionRecord;
use crate::traits::QuestionSource;

struct Scripted {
    gate: Option<oneshot::Receiver<()>>,
    result: TriviaResult<Vec<QuestionRecord>>,
}

/// Question source returning scripted outcomes in call order.
#[derive(Clone, Default)]
pub struct MockQuestionSource {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    calls: Arc<AtomicUsize>,
    amounts: Arc<Mutex<Vec<u32>>>,
}

impl MockQuestionSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an outcome that is returned immediately.
    pub fn push(&self, result: TriviaResult<Vec<QuestionRecord>>) {
        self.script
            .lock()
            .unwrap()
            .push_back(Scripted { gate: None, result });
    }

    /// Queue an outcome that is held back until the returned sender fires
    /// (or is dropped).
    pub fn push_gated(&self, result: TriviaResult<Vec<QuestionRecord>>) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.script.lock().unwrap().push_back(Scripted {
            gate: Some(rx),
            result,
        });
        tx
    }

    /// Number of fetches started so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Amounts requested, in call order.
    pub fn amounts(&self) -> Vec<u32> {
        self.amounts.lock().unwrap().clone()
    }
}

#[async_trait]
impl QuestionSource for MockQuestionSource {
    async fn fetch_questions(&self, amount: u32) -> TriviaResult<Vec<QuestionRecord>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.amounts.lock().unwrap().push(amount);

        let next = self.script.lock().unwrap().pop_front();
        let Some(scripted) = next else {
            return Err(NetworkError::Other {
                message: "No scripted outcome".to_string(),
            }
            .into());
        };

        if let Some(gate) = scripted.gate {
            let _ = gate.await;
        }
        scripted.result
    }
}

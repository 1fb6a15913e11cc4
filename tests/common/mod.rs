//! Common test utilities for integration tests.
//!
//! Fixtures, an [`App`] builder backed by scripted sources, and helpers for
//! driving the event loop and rendering into a `TestBackend`.

#![allow(dead_code, unused_imports)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;

use ratatui::{backend::TestBackend, Terminal};
use trivia_insights::app::App;
use trivia_insights::config::AppConfig;
use trivia_insights::models::QuestionRecord;
use trivia_insights::traits::QuestionSource;
use trivia_insights::ui;

/// The three-record scenario set used throughout the tests.
pub fn scenario_records() -> Vec<QuestionRecord> {
    vec![
        QuestionRecord::new("Science", "easy", "Q1"),
        QuestionRecord::new("Science", "hard", "Q2"),
        QuestionRecord::new("Art", "easy", "Q3"),
    ]
}

/// `n` records spread over a few categories and all three difficulties.
pub fn many_records(n: usize) -> Vec<QuestionRecord> {
    const CATEGORIES: [&str; 4] = ["Science: Computers", "History", "Art", "Entertainment: Film"];
    const DIFFICULTIES: [&str; 3] = ["easy", "medium", "hard"];
    (0..n)
        .map(|i| {
            QuestionRecord::new(
                CATEGORIES[i % CATEGORIES.len()],
                DIFFICULTIES[i % DIFFICULTIES.len()],
                format!("Question number {}?", i),
            )
        })
        .collect()
}

/// A raw Open Trivia DB payload (url3986-encoded) with the scenario records.
pub fn scenario_payload() -> String {
    serde_json::json!({
        "response_code": 0,
        "results": [
            {"type": "multiple", "difficulty": "easy", "category": "Science", "question": "Q1"},
            {"type": "boolean", "difficulty": "hard", "category": "Science", "question": "Q2"},
            {"type": "multiple", "difficulty": "easy", "category": "Art", "question": "Q3"}
        ]
    })
    .to_string()
}

/// Builder for creating test App instances.
pub struct TestAppBuilder {
    config: AppConfig,
    source: Option<Arc<dyn QuestionSource>>,
}

impl TestAppBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: Arc<dyn QuestionSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> App {
        let source = self
            .source
            .unwrap_or_else(|| Arc::new(MockQuestionSource::new()));
        App::new(self.config, source)
    }
}

impl Default for TestAppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Receive one background message and hand it to the app.
pub async fn pump(app: &mut App) {
    let msg = app
        .message_rx
        .as_mut()
        .expect("message receiver already taken")
        .recv()
        .await
        .expect("channel closed");
    app.handle_message(msg);
}

/// Render the app into a `width` x `height` buffer and return it as text,
/// one line per row.
pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    app.update_terminal_dimensions(width, height);
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal.draw(|f| ui::render(f, app)).expect("draw");

    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            out.push_str(buffer[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

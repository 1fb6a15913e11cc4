//! Mock implementations for test fixtures.
//!
//! This module re-exports the mock implementations from
//! `trivia_insights::adapters::mock` and provides test-specific helpers.

pub use trivia_insights::adapters::mock::{MockHttpClient, MockQuestionSource, MockResponse};
pub use trivia_insights::traits::{Headers, HttpClient, HttpError, Response};

use std::sync::Arc;
use std::time::Duration;

use trivia_insights::opentdb::OpenTdbClient;

pub const MOCK_BASE_URL: &str = "https://opentdb.test";

/// Configuration for setting up mock HTTP responses.
pub struct MockHttpConfig {
    client: MockHttpClient,
}

impl MockHttpConfig {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Every request gets this JSON body and status.
    pub fn with_json_response(self, status: u16, json: &str) -> Self {
        self.client.set_default_response(MockResponse::json(status, json));
        self
    }

    /// Every request fails at the transport level.
    pub fn with_transport_error(self, error: HttpError) -> Self {
        self.client.set_default_response(MockResponse::Error(error));
        self
    }

    /// Every request waits this long before responding.
    pub fn with_delay(self, delay: Duration) -> Self {
        self.client.set_delay(delay);
        self
    }

    /// The mock client plus an Open Trivia DB client on top of it.
    pub fn build(self) -> (MockHttpClient, OpenTdbClient) {
        let source = OpenTdbClient::new(MOCK_BASE_URL, Arc::new(self.client.clone()));
        (self.client, source)
    }
}

impl Default for MockHttpConfig {
    fn default() -> Self {
        Self::new()
    }
}

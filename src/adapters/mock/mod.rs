//! Mock implementations for testing.
//!
//! - [`MockHttpClient`] - HTTP client with configurable responses
//! - [`MockQuestionSource`] - question source with scripted, gateable outcomes

pub mod http;
pub mod source;

pub use http::{MockHttpClient, MockResponse};
pub use source::MockQuestionSource;

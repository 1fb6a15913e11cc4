//! Trait abstractions for dependency injection and testability.
//!
//! - [`HttpClient`] - HTTP GET against the question API
//! - [`QuestionSource`] - anything that can produce a batch of questions

pub mod http;
pub mod source;

pub use http::{Headers, HttpClient, HttpError, Response};
pub use source::QuestionSource;

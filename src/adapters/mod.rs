//! Concrete implementations of trait abstractions.
//!
//! - [`ReqwestHttpClient`] - HTTP client using reqwest
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockHttpClient`] - Configurable HTTP responses
//! - [`mock::MockQuestionSource`] - Scripted question batches

pub mod mock;
pub mod reqwest_http;

pub use mock::{MockHttpClient, MockQuestionSource};
pub use reqwest_http::{ReqwestHttpClient, DEFAULT_TIMEOUT};

//! Trivia Insights - a terminal dashboard over the Open Trivia DB
//!
//! This library exposes modules for use in integration tests and benches.

pub mod adapters;
pub mod aggregate;
pub mod app;
pub mod cli;
pub mod config;
pub mod decode;
pub mod error;
pub mod filter;
pub mod loader;
pub mod logging;
pub mod models;
pub mod opentdb;
pub mod traits;
pub mod ui;
pub mod view_state;

//! View state module for decoupling UI rendering from application state.
//!
//! UI rendering is a pure function of derived data. The types here hold
//! that derived data so render code never reaches into the loader or the
//! filter directly.
//!
//! - [`DashboardView`]: category options, filtered subset and aggregates
//! - [`DashboardComposer`]: recompute-on-change memoization of the view

mod dashboard_view;

pub use dashboard_view::{category_options, compose_dashboard, DashboardComposer, DashboardView};

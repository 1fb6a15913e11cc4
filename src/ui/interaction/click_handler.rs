//! Click action handler for the mouse interaction system.
//!
//! This module processes click actions dispatched from the hit area registry,
//! translating them into App state mutations.

use super::hit_area::ClickAction;
use crate::app::App;

/// Handle a click action by updating App state.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();

    match action {
        ClickAction::SelectCategory(category) => {
            tracing::debug!("Click: SelectCategory({})", category);
            app.select_category(category);
        }
        ClickAction::PreviousCategory => app.cycle_category(false),
        ClickAction::NextCategory => app.cycle_category(true),
        ClickAction::ResetFilter => {
            tracing::debug!("Click: ResetFilter");
            app.reset_filter();
        }
        ClickAction::Retry => {
            // The button is only drawn with a warning, but a stale hit area
            // from the previous frame could still be clicked
            if app.loader.warning().is_some() {
                tracing::debug!("Click: Retry");
                app.retry();
            }
        }
        ClickAction::ToggleQuestionList => app.toggle_list_expanded(),
    }
}

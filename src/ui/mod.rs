//! UI rendering for the trivia dashboard
//!
//! Top to bottom:
//! - Header with title, key hints and the load status line
//! - Warning card with a retry button (only after a failed load)
//! - Loading card, or once ready:
//!   - Toolbar: category selector plus `Total` / `Filtered` badges
//!   - Category chips
//!   - Category and difficulty charts (side by side, stacked when compact)
//!   - Question list
//!
//! ## Responsive Layout System
//!
//! [`layout::layout_mode`] maps the terminal width to `Compact` or `Full`.
//! [`LayoutContext`] carries that mode plus the dimensions to every render
//! function. Rendering reads derived data from the memoized
//! [`DashboardComposer`](crate::view_state::DashboardComposer), so resizes and
//! hover changes never recompute aggregates.

pub mod category_chart;
pub mod category_filter;
pub mod difficulty_chart;
pub mod header;
mod helpers;
pub mod interaction;
pub mod layout;
pub mod panels;
pub mod question_list;
pub mod theme;

pub use interaction::{handle_click_action, ClickAction, HitAreaRegistry};
pub use layout::{breakpoints, layout_mode, LayoutContext, LayoutMode};

use ratatui::{layout::Rect, Frame};

use crate::app::App;
use category_chart::{desired_height, render_category_chart, visible_bars};
use category_filter::{chips_height, render_chips, render_toolbar};
use difficulty_chart::{render_difficulty_chart, DESIRED_HEIGHT as DIFFICULTY_HEIGHT};
use header::{header_height, render_header, status_text};
use helpers::spinner_frame;
use panels::{render_empty_selection, render_loading, render_warning, CARD_HEIGHT};
use question_list::render_question_list;

const TOOLBAR_HEIGHT: u16 = 3;
/// Rows the question list keeps before charts get any space
const LIST_MIN_HEIGHT: u16 = 6;

/// Carve `height` rows off the top of `area`.
fn take_rows(area: &mut Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let taken = Rect::new(area.x, area.y, area.width, height);
    area.y += height;
    area.height -= height;
    taken
}

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Main render function
pub fn render(frame: &mut Frame, app: &mut App) {
    let size = frame.area();
    app.hit_registry.clear();

    let ctx = LayoutContext::with_breakpoint(size.width, size.height, app.config.compact_breakpoint);
    let view = app.composer.view(app.loader.questions(), &app.filter);
    let loading = app.loader.is_loading();
    let spinner = spinner_frame(app.tick_count);

    let mut rest = size;

    let header = take_rows(&mut rest, header_height(&ctx));
    render_header(
        frame,
        header,
        &ctx,
        app.config.amount,
        &status_text(app.loader.status(), view.total_all),
        loading.then_some(spinner),
    );

    if let Some(warning) = app.loader.warning() {
        let card = take_rows(&mut rest, CARD_HEIGHT);
        render_warning(frame, card, warning, &mut app.hit_registry);
    }

    if loading {
        let card = take_rows(&mut rest, CARD_HEIGHT);
        render_loading(frame, card, spinner);
        return;
    }

    let toolbar = take_rows(&mut rest, TOOLBAR_HEIGHT);
    render_toolbar(
        frame,
        toolbar,
        app.filter.category(),
        view.total_all,
        view.total_filtered,
        &mut app.hit_registry,
    );

    if view.is_filtered_empty() {
        let card = take_rows(&mut rest, CARD_HEIGHT);
        render_empty_selection(frame, card, &mut app.hit_registry);
        return;
    }

    let max_chip_rows = if ctx.is_compact() { 5 } else { 6 };
    let chip_rows = chips_height(&view.categories, rest.width).min(max_chip_rows);
    let chips = take_rows(&mut rest, chip_rows);
    render_chips(frame, chips, &view.categories, app.filter.category(), &mut app.hit_registry);

    let bars = visible_bars(&view.by_category, ctx.mode, app.config.compact_category_limit).len();
    let chart_budget = rest.height.saturating_sub(LIST_MIN_HEIGHT);

    if ctx.should_stack_charts() {
        let difficulty_h = DIFFICULTY_HEIGHT.min(chart_budget);
        let category_h = desired_height(bars).min(chart_budget - difficulty_h);
        let category_area = take_rows(&mut rest, category_h);
        let difficulty_area = take_rows(&mut rest, difficulty_h);
        render_category_chart(
            frame,
            category_area,
            &view.by_category,
            app.filter.category(),
            app.config.compact_category_limit,
            &ctx,
            &mut app.hit_registry,
        );
        render_difficulty_chart(frame, difficulty_area, &view.by_difficulty, app.filter.category());
    } else {
        let charts_h = desired_height(bars).max(DIFFICULTY_HEIGHT).min(chart_budget);
        let charts = take_rows(&mut rest, charts_h);
        let (left_w, right_w) = ctx.chart_widths(charts.width);
        let left = Rect::new(charts.x, charts.y, left_w, charts.height);
        let right = Rect::new(charts.x + left_w, charts.y, right_w, charts.height);
        render_category_chart(
            frame,
            left,
            &view.by_category,
            app.filter.category(),
            app.config.compact_category_limit,
            &ctx,
            &mut app.hit_registry,
        );
        render_difficulty_chart(frame, right, &view.by_difficulty, app.filter.category());
    }

    render_question_list(
        frame,
        rest,
        &view.filtered,
        app.filter.label(),
        app.config.page_size,
        app.list_expanded,
        &mut app.list_scroll,
        &mut app.hit_registry,
    );
}

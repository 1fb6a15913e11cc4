//! Card panels: load warning, loading indicator and the empty-selection
//! notice.

use ratatui::{
    layout::Rect,
    style::Style,
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::header::LOADING_TEXT;
use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{button_style, COLOR_BORDER, COLOR_HEADER, COLOR_WARNING};

pub const EMPTY_SELECTION_TEXT: &str = "No questions for this selection.";
pub const SHOW_ALL_LABEL: &str = "Show all";
pub const RETRY_LABEL: &str = "[r] Retry";

/// Height of every card: border, message, button, border.
pub const CARD_HEIGHT: u16 = 4;

fn card(border: Style) -> Block<'static> {
    Block::default().borders(Borders::ALL).border_style(border)
}

/// Draw a clickable button on `row` at the start of `inner`.
fn render_button(
    frame: &mut Frame,
    inner: Rect,
    row: u16,
    label: &str,
    action: ClickAction,
    registry: &mut HitAreaRegistry,
) {
    let label = format!(" {} ", label);
    let rect = Rect::new(inner.x, row, (label.width() as u16).min(inner.width), 1);
    let hovered = registry.is_hovered(rect);
    frame.render_widget(Paragraph::new(Span::styled(label, button_style(hovered))), rect);
    registry.register(rect, action, None);
}

/// Load failure notice with a retry button.
pub fn render_warning(frame: &mut Frame, area: Rect, warning: &str, registry: &mut HitAreaRegistry) {
    let block = card(Style::default().fg(COLOR_WARNING));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    frame.render_widget(
        Paragraph::new(Span::styled(warning.to_string(), Style::default().fg(COLOR_WARNING))),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );
    if inner.height > 1 {
        render_button(frame, inner, inner.y + 1, RETRY_LABEL, ClickAction::Retry, registry);
    }
}

pub fn render_loading(frame: &mut Frame, area: Rect, spinner: &str) {
    let block = card(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{} {}", spinner, LOADING_TEXT),
            Style::default().fg(COLOR_HEADER),
        ))
        .centered(),
        inner,
    );
}

/// Shown instead of charts and list when the filter matches nothing.
pub fn render_empty_selection(frame: &mut Frame, area: Rect, registry: &mut HitAreaRegistry) {
    let block = card(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    frame.render_widget(
        Paragraph::new(Span::styled(EMPTY_SELECTION_TEXT, Style::default().fg(COLOR_HEADER))),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );
    if inner.height > 1 {
        render_button(frame, inner, inner.y + 1, SHOW_ALL_LABEL, ClickAction::ResetFilter, registry);
    }
}

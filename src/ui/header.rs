//! Header: title, data source blurb, key hints and the load status line.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::layout::LayoutContext;
use super::theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER};
use crate::loader::LoadStatus;

pub const HEADER_TITLE: &str = "Trivia Insights";
pub const LOADING_TEXT: &str = "Loading trivia questions…";
const KEY_HINTS: &str = "q quit  ←/→ category  Esc reset  e expand  ↑/↓ scroll";

fn description(amount: u32) -> String {
    format!(
        "{}-question snapshot from Open Trivia DB (opentdb.com). \
         Filter by category and explore the difficulty distribution.",
        amount
    )
}

/// Status line announced on every load transition.
pub fn status_text(status: LoadStatus, total: usize) -> String {
    match status {
        LoadStatus::Loading => LOADING_TEXT.to_string(),
        LoadStatus::Ready => format!("Loaded {} items", total),
    }
}

/// Header rows: title and status always, the description only when tall
/// enough.
pub fn header_height(ctx: &LayoutContext) -> u16 {
    if ctx.is_short() {
        2
    } else {
        3
    }
}

pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    ctx: &LayoutContext,
    amount: u32,
    status: &str,
    spinner: Option<&str>,
) {
    let mut title = vec![Span::styled(
        HEADER_TITLE,
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
    )];
    let hints_width = KEY_HINTS.width() as u16;
    if !ctx.is_compact() && area.width > HEADER_TITLE.len() as u16 + hints_width + 2 {
        let pad = area.width - HEADER_TITLE.len() as u16 - hints_width;
        title.push(Span::raw(" ".repeat(pad as usize)));
        title.push(Span::styled(KEY_HINTS, Style::default().fg(COLOR_DIM)));
    }

    let mut lines = vec![Line::from(title)];
    if !ctx.is_short() {
        lines.push(Line::from(Span::styled(
            description(amount),
            Style::default().fg(COLOR_HEADER),
        )));
    }

    let mut status_line = Vec::new();
    if let Some(frame_char) = spinner {
        status_line.push(Span::styled(format!("{} ", frame_char), Style::default().fg(COLOR_ACCENT)));
    }
    status_line.push(Span::styled(status.to_string(), Style::default().fg(COLOR_DIM)));
    lines.push(Line::from(status_line));

    frame.render_widget(Paragraph::new(lines), area);
}

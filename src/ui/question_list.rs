//! Question list with a difficulty pill per row.
//!
//! Shows the first page of the filtered records, or all of them once
//! expanded. The expansion toggle only appears when there is more than a
//! page to show.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::helpers::truncate_to_width;
use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{button_style, difficulty_color, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::models::QuestionRecord;

pub const EMPTY_MESSAGE: &str = "No questions available for this category.";
pub const RESET_LABEL: &str = "Reset filter";

/// Widest pill text ("medium") plus padding
const PILL_WIDTH: usize = 8;

/// Records shown for the current expansion state.
pub fn visible_questions(
    records: &[QuestionRecord],
    page_size: usize,
    expanded: bool,
) -> &[QuestionRecord] {
    if expanded {
        records
    } else {
        &records[..records.len().min(page_size)]
    }
}

/// Label of the expansion toggle, or `None` when everything fits on a page.
pub fn toggle_label(total: usize, page_size: usize, expanded: bool) -> Option<String> {
    if total <= page_size {
        None
    } else if expanded {
        Some(format!("Show first {}", page_size))
    } else {
        Some(format!("Show all ({})", total))
    }
}

/// Panel title, e.g. "Questions (all categories) - 10 of 50".
pub fn list_title(category_label: &str, visible: usize, total: usize) -> String {
    if total == 0 {
        format!("Questions ({})", category_label)
    } else {
        format!("Questions ({}) - {} of {}", category_label, visible, total)
    }
}

/// Largest valid scroll offset for `rows` items in a viewport `height` tall.
pub fn max_scroll(rows: usize, height: usize) -> usize {
    rows.saturating_sub(height)
}

fn pill(difficulty: &str) -> Span<'static> {
    let text = if difficulty.is_empty() { "?" } else { difficulty };
    let label = format!(" {:^width$} ", text, width = PILL_WIDTH - 2);
    Span::styled(
        label,
        Style::default()
            .fg(Color::Black)
            .bg(difficulty_color(difficulty))
            .add_modifier(Modifier::BOLD),
    )
}

/// Render the list. `scroll` is clamped to the content and written back.
#[allow(clippy::too_many_arguments)]
pub fn render_question_list(
    frame: &mut Frame,
    area: Rect,
    records: &[QuestionRecord],
    category_label: &str,
    page_size: usize,
    expanded: bool,
    scroll: &mut usize,
    registry: &mut HitAreaRegistry,
) {
    let visible = visible_questions(records, page_size, expanded);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", list_title(category_label, visible.len(), records.len())),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    // The dashboard shows its own empty-selection card before reaching the
    // list; this branch serves callers that render the list on its own.
    if records.is_empty() {
        *scroll = 0;
        frame.render_widget(
            Paragraph::new(Span::styled(EMPTY_MESSAGE, Style::default().fg(COLOR_DIM))),
            Rect::new(inner.x, inner.y, inner.width, 1),
        );
        if inner.height > 2 {
            let label = format!(" {} ", RESET_LABEL);
            let button = Rect::new(inner.x, inner.y + 2, (label.width() as u16).min(inner.width), 1);
            let hovered = registry.is_hovered(button);
            frame.render_widget(Paragraph::new(Span::styled(label, button_style(hovered))), button);
            registry.register(button, ClickAction::ResetFilter, None);
        }
        return;
    }

    let toggle = toggle_label(records.len(), page_size, expanded);
    let footer_rows = if toggle.is_some() { 2 } else { 0 };
    let list_height = inner.height.saturating_sub(footer_rows) as usize;

    *scroll = (*scroll).min(max_scroll(visible.len(), list_height));
    let text_width = (inner.width as usize).saturating_sub(PILL_WIDTH + 1);

    let lines: Vec<Line> = visible
        .iter()
        .skip(*scroll)
        .take(list_height)
        .map(|q| {
            Line::from(vec![
                pill(&q.difficulty),
                Span::raw(" "),
                Span::styled(
                    truncate_to_width(&q.question, text_width),
                    Style::default().fg(COLOR_HEADER),
                ),
            ])
        })
        .collect();
    frame.render_widget(
        Paragraph::new(lines),
        Rect::new(inner.x, inner.y, inner.width, list_height as u16),
    );

    if let Some(label) = toggle {
        if inner.height >= footer_rows {
            let label = format!(" [e] {} ", label);
            let y = inner.y + inner.height - 1;
            let button = Rect::new(inner.x, y, (label.width() as u16).min(inner.width), 1);
            let hovered = registry.is_hovered(button);
            frame.render_widget(Paragraph::new(Span::styled(label, button_style(hovered))), button);
            registry.register(button, ClickAction::ToggleQuestionList, None);
        }
    }
}

//! "Questions by category" bar chart.
//!
//! One row per category, highest count first. Each row is a hit area that
//! carries the raw category name, so clicking a row focuses the filter on
//! exactly that category even when its label had to be truncated.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::helpers::fit_to_width;
use super::interaction::{ClickAction, HitAreaRegistry};
use super::layout::{LayoutContext, LayoutMode};
use super::theme::{COLOR_ACCENT, COLOR_BAR, COLOR_BORDER, COLOR_DIM, COLOR_HEADER, COLOR_HOVER_BG};
use crate::models::CategoryCount;

pub const CHART_TITLE: &str = "Questions by category";
pub const CHART_HINT: &str = "Click a bar to focus on that category.";

/// Upper bound of the value axis: 25% headroom over the largest count, at
/// least 5.
pub fn axis_max(data: &[CategoryCount]) -> usize {
    let max = data.iter().map(|d| d.value).max().unwrap_or(0);
    (max * 5).div_ceil(4).max(5)
}

/// Bars actually drawn: all of them, or the top `limit` in compact mode.
pub fn visible_bars(
    data: &[CategoryCount],
    mode: LayoutMode,
    limit: Option<usize>,
) -> &[CategoryCount] {
    match (mode, limit) {
        (LayoutMode::Compact, Some(limit)) if data.len() > limit => &data[..limit],
        _ => data,
    }
}

/// Cells filled for `value` on a bar track `width` cells wide.
///
/// Any non-zero value gets at least one cell so it stays visible.
pub fn bar_length(value: usize, axis_max: usize, width: u16) -> u16 {
    if value == 0 || axis_max == 0 || width == 0 {
        return 0;
    }
    let cells = (value * width as usize + axis_max / 2) / axis_max;
    cells.clamp(1, width as usize) as u16
}

/// Note shown when compact mode hides some categories.
pub fn truncation_note(limit: usize) -> String {
    format!(" Showing top {} categories on narrow terminals.", limit)
}

/// Rows the chart wants: bars, hint line and borders.
pub fn desired_height(visible: usize) -> u16 {
    visible as u16 + 3
}

pub fn render_category_chart(
    frame: &mut Frame,
    area: Rect,
    data: &[CategoryCount],
    selected: &str,
    compact_limit: Option<usize>,
    ctx: &LayoutContext,
    registry: &mut HitAreaRegistry,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", CHART_TITLE),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let bars = visible_bars(data, ctx.mode, compact_limit);
    let truncated = bars.len() < data.len();

    let rows_height = inner.height.saturating_sub(1);
    let axis = axis_max(bars);
    let label_width = ctx.label_column_width(inner.width);
    let value_width = axis.to_string().len() as u16 + 1;
    let track_width = inner.width.saturating_sub(label_width + value_width);

    for (i, bar) in bars.iter().take(rows_height as usize).enumerate() {
        let row = Rect::new(inner.x, inner.y + i as u16, inner.width, 1);
        let hovered = registry.is_hovered(row);
        let is_selected = bar.name == selected;

        let label_style = if is_selected {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_HEADER)
        };
        let filled = bar_length(bar.value, axis, track_width);

        let line = Line::from(vec![
            Span::styled(
                fit_to_width(&bar.name, label_width.saturating_sub(1) as usize),
                label_style,
            ),
            Span::raw(" "),
            Span::styled("█".repeat(filled as usize), Style::default().fg(COLOR_BAR)),
            Span::styled(format!(" {}", bar.value), Style::default().fg(COLOR_HEADER)),
        ]);

        let row_style = if hovered {
            Style::default().bg(COLOR_HOVER_BG)
        } else {
            Style::default()
        };
        frame.render_widget(Paragraph::new(line).style(row_style), row);
        registry.register(
            row,
            ClickAction::SelectCategory(bar.name.clone()),
            Some(Style::default().bg(COLOR_HOVER_BG)),
        );
    }

    let mut hint = CHART_HINT.to_string();
    if let (true, Some(limit)) = (truncated, compact_limit) {
        hint.push_str(&truncation_note(limit));
    }
    let hint_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(hint, Style::default().fg(COLOR_DIM))),
        hint_area,
    );
}

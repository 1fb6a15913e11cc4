//! Difficulty distribution chart.
//!
//! A proportional stacked bar (the terminal stand-in for a pie) with a
//! legend. Receives the already-filtered aggregate; it never filters.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::theme::{difficulty_color, COLOR_BORDER, COLOR_DIM, COLOR_HEADER};
use crate::filter::ALL_CATEGORY;
use crate::models::DifficultyCount;

pub const HINT_WITH_DATA: &str = "This chart respects the active category filter.";
pub const HINT_NO_DATA: &str = "No difficulty data available for this selection.";
pub const NO_DATA_LABEL: &str = "No data";

/// Rows the chart wants: title border, bar (2), gap, legend, gap, hint, border.
pub const DESIRED_HEIGHT: u16 = 8;

/// Caption naming the category the data was filtered to.
pub fn caption(selected_category: &str) -> String {
    if selected_category == ALL_CATEGORY {
        "Difficulty distribution (all categories)".to_string()
    } else {
        format!("Difficulty distribution ({})", selected_category)
    }
}

/// Legend entries: non-zero buckets only, in aggregate order.
pub fn legend_entries(data: &[DifficultyCount]) -> Vec<&DifficultyCount> {
    data.iter().filter(|d| d.value > 0).collect()
}

/// Split `width` cells between the buckets in proportion to their values.
///
/// Largest-remainder rounding, so the widths always sum to `width` when
/// there is any data and every non-empty bucket that earns a cell gets it.
pub fn segment_widths(data: &[DifficultyCount], width: u16) -> Vec<u16> {
    let total: usize = data.iter().map(|d| d.value).sum();
    if total == 0 || width == 0 {
        return vec![0; data.len()];
    }

    let width = width as usize;
    let mut widths: Vec<usize> = data.iter().map(|d| d.value * width / total).collect();
    let mut remainders: Vec<(usize, usize)> = data
        .iter()
        .enumerate()
        .map(|(i, d)| (i, d.value * width % total))
        .collect();
    remainders.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let leftover = width - widths.iter().sum::<usize>();
    for (i, _) in remainders.into_iter().take(leftover) {
        widths[i] += 1;
    }
    widths.into_iter().map(|w| w as u16).collect()
}

fn percent(value: usize, total: usize) -> usize {
    if total == 0 {
        0
    } else {
        (value * 100 + total / 2) / total
    }
}

pub fn render_difficulty_chart(
    frame: &mut Frame,
    area: Rect,
    data: &[DifficultyCount],
    selected_category: &str,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            format!(" {} ", caption(selected_category)),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let total: usize = data.iter().map(|d| d.value).sum();
    let mut lines: Vec<Line> = Vec::new();

    if total == 0 {
        let empty_bar = Span::styled(
            "░".repeat(inner.width as usize),
            Style::default().fg(COLOR_DIM),
        );
        lines.push(Line::from(empty_bar.clone()));
        lines.push(Line::from(empty_bar));
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(COLOR_DIM)),
            Span::styled(NO_DATA_LABEL, Style::default().fg(COLOR_HEADER)),
        ]));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(HINT_NO_DATA, Style::default().fg(COLOR_DIM))));
    } else {
        let widths = segment_widths(data, inner.width);
        let bar: Vec<Span> = data
            .iter()
            .zip(&widths)
            .filter(|(_, w)| **w > 0)
            .map(|(d, w)| {
                Span::styled(
                    "█".repeat(*w as usize),
                    Style::default().fg(difficulty_color(&d.key)),
                )
            })
            .collect();
        lines.push(Line::from(bar.clone()));
        lines.push(Line::from(bar));
        lines.push(Line::default());

        let mut legend: Vec<Span> = Vec::new();
        for entry in legend_entries(data) {
            legend.push(Span::styled("■ ", Style::default().fg(difficulty_color(&entry.key))));
            legend.push(Span::styled(
                format!("{}: {} ({}%)   ", entry.name, entry.value, percent(entry.value, total)),
                Style::default().fg(COLOR_HEADER),
            ));
        }
        lines.push(Line::from(legend));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(HINT_WITH_DATA, Style::default().fg(COLOR_DIM))));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn counts(easy: usize, medium: usize, hard: usize) -> Vec<DifficultyCount> {
        vec![
            DifficultyCount::new("easy", easy),
            DifficultyCount::new("medium", medium),
            DifficultyCount::new("hard", hard),
        ]
    }

    fn render(data: &[DifficultyCount], selected: &str) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 10)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                render_difficulty_chart(f, area, data, selected);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_caption() {
        assert_eq!(caption("All"), "Difficulty distribution (all categories)");
        assert_eq!(caption("Art"), "Difficulty distribution (Art)");
    }

    #[test]
    fn test_legend_omits_zero_buckets() {
        let data = counts(2, 0, 1);
        let keys: Vec<&str> = legend_entries(&data).iter().map(|d| d.key.as_str()).collect();
        assert_eq!(keys, vec!["easy", "hard"]);
    }

    #[test]
    fn test_segment_widths_sum_to_width() {
        assert_eq!(segment_widths(&counts(1, 1, 1), 10), vec![4, 3, 3]);
        assert_eq!(segment_widths(&counts(2, 0, 1), 30), vec![20, 0, 10]);
        assert_eq!(segment_widths(&counts(0, 0, 0), 30), vec![0, 0, 0]);
        let widths = segment_widths(&counts(17, 23, 10), 61);
        assert_eq!(widths.iter().sum::<u16>(), 61);
    }

    #[test]
    fn test_render_with_data() {
        let text = render(&counts(2, 0, 1), "Science");
        assert!(text.contains("Difficulty distribution (Science)"));
        assert!(text.contains("Easy: 2 (67%)"));
        assert!(text.contains("Hard: 1 (33%)"));
        assert!(!text.contains("Medium"));
        assert!(text.contains(HINT_WITH_DATA));
    }

    #[test]
    fn test_render_all_zero_shows_no_data() {
        let text = render(&counts(0, 0, 0), "All");
        assert!(text.contains("(all categories)"));
        assert!(text.contains(NO_DATA_LABEL));
        assert!(text.contains(HINT_NO_DATA));
    }
}

//! Category controls: the selector toolbar with totals, and the quick
//! filter chips.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::helpers::truncate_to_width;
use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_BUTTON_BG, COLOR_DIM, COLOR_HEADER, COLOR_HOVER_BG};

/// Longest chip label before truncation
const MAX_CHIP_LABEL: usize = 28;
/// Gap between chips
const CHIP_GAP: u16 = 1;

/// A chip placed at (`x`, `row`) relative to the chip area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipSlot {
    pub index: usize,
    pub row: u16,
    pub x: u16,
    pub width: u16,
}

fn chip_label(name: &str) -> String {
    format!(" {} ", truncate_to_width(name, MAX_CHIP_LABEL))
}

/// Flow chips left to right, wrapping at `width`.
pub fn layout_chips(options: &[String], width: u16) -> Vec<ChipSlot> {
    let mut slots = Vec::with_capacity(options.len());
    let (mut row, mut x) = (0u16, 0u16);
    for (index, name) in options.iter().enumerate() {
        let chip_width = (chip_label(name).width() as u16).min(width);
        if x > 0 && x + chip_width > width {
            row += 1;
            x = 0;
        }
        slots.push(ChipSlot {
            index,
            row,
            x,
            width: chip_width,
        });
        x += chip_width + CHIP_GAP;
    }
    slots
}

/// Rows the chip panel needs at `width`, including borders.
pub fn chips_height(options: &[String], width: u16) -> u16 {
    let rows = layout_chips(options, width.saturating_sub(2))
        .last()
        .map_or(1, |slot| slot.row + 1);
    rows + 2
}

/// Toolbar: `Category: ◀ All ▶` with `Total` / `Filtered` badges.
pub fn render_toolbar(
    frame: &mut Frame,
    area: Rect,
    selected: &str,
    total_all: usize,
    total_filtered: usize,
    registry: &mut HitAreaRegistry,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    let prefix = "Category: ";
    let value = format!(" {} ", truncate_to_width(selected, MAX_CHIP_LABEL));
    let prefix_w = prefix.width() as u16;
    let value_w = value.width() as u16;

    let line = Line::from(vec![
        Span::styled(prefix, Style::default().fg(COLOR_DIM)),
        Span::styled("◀", Style::default().fg(COLOR_ACCENT)),
        Span::styled(value, Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)),
        Span::styled("▶", Style::default().fg(COLOR_ACCENT)),
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    let row = inner.y;
    registry.register(
        Rect::new(inner.x + prefix_w, row, 1, 1),
        ClickAction::PreviousCategory,
        None,
    );
    registry.register(
        Rect::new(inner.x + prefix_w + 1 + value_w, row, 1, 1),
        ClickAction::NextCategory,
        None,
    );

    let badges = Line::from(vec![
        Span::styled(format!(" Total: {} ", total_all), Style::default().fg(COLOR_HEADER).bg(COLOR_HOVER_BG)),
        Span::raw(" "),
        Span::styled(
            format!(" Filtered: {} ", total_filtered),
            Style::default().fg(COLOR_HEADER).bg(COLOR_HOVER_BG),
        ),
    ]);
    let badges_w = badges.width() as u16;
    let used = prefix_w + value_w + 2;
    if inner.width >= used + badges_w + 2 {
        let badge_area = Rect::new(inner.x + inner.width - badges_w, row, badges_w, 1);
        frame.render_widget(Paragraph::new(badges), badge_area);
    } else if inner.height > 1 {
        frame.render_widget(
            Paragraph::new(badges),
            Rect::new(inner.x, row + 1, inner.width, 1),
        );
    }
}

/// Quick-filter chips, one per selector option ("All" first).
pub fn render_chips(
    frame: &mut Frame,
    area: Rect,
    options: &[String],
    selected: &str,
    registry: &mut HitAreaRegistry,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(" Categories ", Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width == 0 || inner.height == 0 {
        return;
    }

    for slot in layout_chips(options, inner.width) {
        if slot.row >= inner.height {
            break;
        }
        let name = &options[slot.index];
        let rect = Rect::new(inner.x + slot.x, inner.y + slot.row, slot.width, 1);
        let active = name == selected;
        let style = if active {
            Style::default().fg(COLOR_HEADER).bg(COLOR_BUTTON_BG).add_modifier(Modifier::BOLD)
        } else if registry.is_hovered(rect) {
            Style::default().fg(COLOR_HEADER).bg(COLOR_HOVER_BG)
        } else {
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::DIM)
        };
        frame.render_widget(Paragraph::new(Span::styled(chip_label(name), style)), rect);
        registry.register(rect, ClickAction::SelectCategory(name.clone()), None);
    }
}

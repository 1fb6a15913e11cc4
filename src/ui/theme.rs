//! Color theme constants for the dashboard.

use ratatui::style::{Color, Style};

/// Panel border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for the title and active elements
pub const COLOR_ACCENT: Color = Color::Cyan;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for hints and secondary info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Category bars
pub const COLOR_BAR: Color = Color::Rgb(59, 130, 246); // blue #3B82F6

/// Background of the category row under the mouse
pub const COLOR_HOVER_BG: Color = Color::Rgb(30, 41, 59);

/// Warning card
pub const COLOR_WARNING: Color = Color::LightRed;

/// Clickable buttons
pub const COLOR_BUTTON: Color = Color::White;
pub const COLOR_BUTTON_BG: Color = Color::Rgb(37, 99, 235);

// ============================================================================
// Difficulty Colors
// ============================================================================

pub const COLOR_EASY: Color = Color::Rgb(34, 197, 94); // green #22C55E
pub const COLOR_MEDIUM: Color = Color::Rgb(234, 179, 8); // yellow #EAB308
pub const COLOR_HARD: Color = Color::Rgb(239, 68, 68); // red #EF4444

/// Anything that is not easy, medium or hard
pub const COLOR_UNKNOWN_DIFFICULTY: Color = Color::Gray;

/// Color for a difficulty key.
pub fn difficulty_color(key: &str) -> Color {
    match key {
        "easy" => COLOR_EASY,
        "medium" => COLOR_MEDIUM,
        "hard" => COLOR_HARD,
        _ => COLOR_UNKNOWN_DIFFICULTY,
    }
}

/// Style for a clickable button label.
pub fn button_style(hovered: bool) -> Style {
    let bg = if hovered { COLOR_ACCENT } else { COLOR_BUTTON_BG };
    Style::default().fg(COLOR_BUTTON).bg(bg)
}

//! Responsive Layout System
//!
//! The dashboard has two layout modes. [`layout_mode`] is a pure function of
//! the terminal width, so nothing rendered depends on anything but the
//! current size. [`LayoutContext`] wraps the dimensions together with the
//! mode and provides the proportional sizing used by the widgets.

use crate::config::DEFAULT_COMPACT_BREAKPOINT;

/// Terminal width breakpoints for responsive layouts
pub mod breakpoints {
    /// Narrow terminal: charts stack and labels shrink at or below this
    pub const COMPACT_WIDTH: u16 = super::DEFAULT_COMPACT_BREAKPOINT;
    /// Short terminal: decorative lines are dropped below this height
    pub const SHORT_HEIGHT: u16 = 24;
}

/// How the dashboard arranges its panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Stacked charts, narrower label column
    Compact,
    /// Charts side by side
    Full,
}

/// Layout mode for a terminal `width` columns wide.
///
/// Widths at or below `breakpoint` are compact.
pub fn layout_mode(width: u16, breakpoint: u16) -> LayoutMode {
    if width <= breakpoint {
        LayoutMode::Compact
    } else {
        LayoutMode::Full
    }
}

/// Layout context holding terminal dimensions for responsive calculations.
#[derive(Debug, Clone, Copy)]
pub struct LayoutContext {
    /// Terminal width in columns
    pub width: u16,
    /// Terminal height in rows
    pub height: u16,
    pub mode: LayoutMode,
}

impl LayoutContext {
    /// Create a context using the default breakpoint.
    pub fn new(width: u16, height: u16) -> Self {
        Self::with_breakpoint(width, height, breakpoints::COMPACT_WIDTH)
    }

    pub fn with_breakpoint(width: u16, height: u16, breakpoint: u16) -> Self {
        Self {
            width,
            height,
            mode: layout_mode(width, breakpoint),
        }
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    /// Calculate a height as a percentage of terminal height, minimum 1.
    pub fn percent_height(&self, percentage: u16) -> u16 {
        ((self.height as u32 * percentage as u32) / 100).max(1) as u16
    }

    pub fn is_compact(&self) -> bool {
        self.mode == LayoutMode::Compact
    }

    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SHORT_HEIGHT
    }

    /// Charts are stacked vertically instead of side by side.
    pub fn should_stack_charts(&self) -> bool {
        self.is_compact()
    }

    /// Width of the category label column for a chart `inner_width` wide.
    ///
    /// Takes half the chart when compact and 42% otherwise, never less than
    /// 12 columns nor more than 60% of the chart.
    pub fn label_column_width(&self, inner_width: u16) -> u16 {
        let share = if self.is_compact() { 50 } else { 42 };
        let wanted = ((inner_width as u32 * share) / 100) as u16;
        let max = ((inner_width as u32 * 60) / 100) as u16;
        wanted.max(12).min(max)
    }

    /// Split `width` between the category chart and the difficulty chart.
    pub fn chart_widths(&self, width: u16) -> (u16, u16) {
        let left = ((width as u32 * 58) / 100) as u16;
        (left, width - left)
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_mode_breakpoint_is_inclusive() {
        assert_eq!(layout_mode(79, 80), LayoutMode::Compact);
        assert_eq!(layout_mode(80, 80), LayoutMode::Compact);
        assert_eq!(layout_mode(81, 80), LayoutMode::Full);
        assert_eq!(layout_mode(0, 80), LayoutMode::Compact);
    }

    #[test]
    fn test_layout_mode_is_pure() {
        for width in [40, 80, 81, 200] {
            assert_eq!(layout_mode(width, 80), layout_mode(width, 80));
        }
    }

    #[test]
    fn test_default() {
        let ctx = LayoutContext::default();
        assert_eq!(ctx.width, 80);
        assert_eq!(ctx.height, 24);
        assert!(ctx.is_compact());
    }

    #[test]
    fn test_percent_width() {
        let ctx = LayoutContext::new(100, 40);
        assert_eq!(ctx.percent_width(50), 50);
        assert_eq!(ctx.percent_width(0), 1); // Minimum of 1
        assert_eq!(ctx.percent_height(50), 20);
    }

    #[test]
    fn test_label_column_width() {
        let full = LayoutContext::new(120, 40);
        assert_eq!(full.label_column_width(100), 42);

        let compact = LayoutContext::new(60, 40);
        assert_eq!(compact.label_column_width(60), 30);

        // Minimum wins over the share, but never past 60%
        assert_eq!(compact.label_column_width(22), 12);
        assert_eq!(full.label_column_width(10), 6);
    }

    #[test]
    fn test_chart_widths_sum() {
        let ctx = LayoutContext::new(120, 40);
        let (left, right) = ctx.chart_widths(120);
        assert_eq!(left + right, 120);
        assert!(left > right);
    }

    #[test]
    fn test_custom_breakpoint() {
        let ctx = LayoutContext::with_breakpoint(100, 40, 100);
        assert!(ctx.should_stack_charts());
        assert!(!ctx.is_short());
    }
}

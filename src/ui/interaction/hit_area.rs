//! Hit area system for mouse interactions.
//!
//! This module provides a registry-based approach to handling clickable regions
//! in the TUI. Components register hit areas during rendering, and the event
//! loop queries the registry to determine what action to take on mouse events.

use ratatui::layout::Rect;
use ratatui::style::Style;

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Focus on a category (raw name as it appears in the data, or "All")
    SelectCategory(String),
    /// Step the category selector backwards
    PreviousCategory,
    /// Step the category selector forwards
    NextCategory,
    /// Clear the category filter
    ResetFilter,
    /// Re-fetch after a failed load
    Retry,
    /// Switch the question list between the first page and everything
    ToggleQuestionList,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
    /// Optional style to apply when hovering over this area
    pub hover_style: Option<Style>,
}

impl HitArea {
    /// Create a new hit area with the given rect and action.
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self {
            rect,
            action,
            hover_style: None,
        }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.rect, x, y)
    }
}

#[inline]
fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}

/// Registry for managing hit areas across the UI.
///
/// Hit areas are registered during rendering and cleared at the start of each
/// render cycle. The pointer position survives the clear so render code can
/// highlight whatever sits under the mouse.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// All registered hit areas (order matters for overlapping regions)
    areas: Vec<HitArea>,
    /// Last known mouse position
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas.
    ///
    /// Call this at the start of each render cycle.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a new hit area.
    ///
    /// Areas registered later take priority over earlier ones for overlapping
    /// regions (z-order: later = on top).
    pub fn register(&mut self, rect: Rect, action: ClickAction, hover_style: Option<Style>) {
        self.areas.push(HitArea {
            rect,
            action,
            hover_style,
        });
    }

    /// Perform a hit test at the given position.
    ///
    /// Returns the action for the topmost hit area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.find_index(x, y).map(|i| self.areas[i].action.clone())
    }

    /// Record the mouse position.
    ///
    /// Returns true if the pointer moved onto a different area (or off one),
    /// which requires a redraw.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let before = self.hovered_index();
        self.pointer = Some((x, y));
        before != self.hovered_index()
    }

    /// Whether the mouse is over `rect`.
    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.pointer
            .is_some_and(|(x, y)| rect_contains(rect, x, y))
    }

    /// Hover style for `rect`, if the pointer is over a registered area with
    /// exactly that rect.
    pub fn get_hover_style(&self, rect: Rect) -> Option<Style> {
        let area = self.get_hovered()?;
        if area.rect == rect {
            area.hover_style
        } else {
            None
        }
    }

    /// Get the currently hovered area (if any).
    pub fn get_hovered(&self) -> Option<&HitArea> {
        self.hovered_index().and_then(|i| self.areas.get(i))
    }

    /// All registered areas in registration order.
    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    fn hovered_index(&self) -> Option<usize> {
        let (x, y) = self.pointer?;
        self.find_index(x, y)
    }

    /// Index of the topmost area containing the point.
    fn find_index(&self, x: u16, y: u16) -> Option<usize> {
        self.areas
            .iter()
            .enumerate()
            .rev()
            .find(|(_, area)| area.contains(x, y))
            .map(|(i, _)| i)
    }
}

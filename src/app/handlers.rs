//! Keyboard and mouse handling for the App.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use crate::ui::interaction::handle_click_action;

/// Rows moved per wheel notch
const WHEEL_STEP: isize = 3;

impl App {
    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.mark_dirty();

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') => self.quit(),
            // Retry is only offered while a warning is shown
            KeyCode::Char('r') if self.loader.warning().is_some() => {
                self.retry();
            }
            KeyCode::Right | KeyCode::Tab => self.cycle_category(true),
            KeyCode::Left | KeyCode::BackTab => self.cycle_category(false),
            KeyCode::Esc | KeyCode::Char('0') => self.reset_filter(),
            KeyCode::Char('e') => self.toggle_list_expanded(),
            KeyCode::Down | KeyCode::Char('j') => self.scroll_list(1),
            KeyCode::Up | KeyCode::Char('k') => self.scroll_list(-1),
            _ => {}
        }
    }

    /// Handle clicks, hover and wheel scrolling.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_registry.hit_test(mouse.column, mouse.row) {
                    handle_click_action(self, action);
                }
            }
            MouseEventKind::Moved => {
                if self.hit_registry.update_hover(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            MouseEventKind::ScrollDown => self.scroll_list(WHEEL_STEP),
            MouseEventKind::ScrollUp => self.scroll_list(-WHEEL_STEP),
            _ => {}
        }
    }
}

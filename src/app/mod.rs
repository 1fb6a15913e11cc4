//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct, which wires the
//! [`DataLoader`], the [`FilterState`] and the memoized
//! [`DashboardComposer`] together with presentation-only state (list
//! expansion, scroll offset, hit areas, terminal size).
//!
//! - [`AppMessage`] - Messages for async communication

mod handlers;
mod messages;

pub use messages::AppMessage;

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::adapters::ReqwestHttpClient;
use crate::config::AppConfig;
use crate::filter::FilterState;
use crate::loader::{CompletionOutcome, DataLoader, RequestId};
use crate::opentdb::OpenTdbClient;
use crate::traits::QuestionSource;
use crate::ui::interaction::HitAreaRegistry;
use crate::ui::layout::{layout_mode, LayoutMode};
use crate::view_state::{DashboardComposer, DashboardView};

/// Main application state
pub struct App {
    /// Effective configuration
    pub config: AppConfig,
    /// Fetch lifecycle and the question snapshot
    pub loader: DataLoader,
    /// Active category filter
    pub filter: FilterState,
    /// Memoized derived data for rendering
    pub composer: DashboardComposer,
    /// Whether the question list shows every record instead of the first page
    pub list_expanded: bool,
    /// First visible row of the question list
    pub list_scroll: usize,
    /// Clickable regions registered during the last render
    pub hit_registry: HitAreaRegistry,
    /// Receiver for async messages, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    pub terminal_width: u16,
    pub terminal_height: u16,
    /// Tick counter for the loading spinner
    pub tick_count: u64,
    pub should_quit: bool,
    /// Dirty flag: set whenever visible state changes
    pub needs_redraw: bool,
    mounted: bool,
}

impl App {
    /// Create an app that fetches from `source`. Nothing is loaded until
    /// [`App::mount`].
    pub fn new(config: AppConfig, source: Arc<dyn QuestionSource>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let loader = DataLoader::new(source, message_tx, config.amount);

        Self {
            config,
            loader,
            filter: FilterState::new(),
            composer: DashboardComposer::new(),
            list_expanded: false,
            list_scroll: 0,
            hit_registry: HitAreaRegistry::new(),
            message_rx: Some(message_rx),
            terminal_width: 80,
            terminal_height: 24,
            tick_count: 0,
            should_quit: false,
            needs_redraw: true,
            mounted: false,
        }
    }

    /// Create an app backed by the Open Trivia DB over reqwest.
    pub fn from_config(config: AppConfig) -> Self {
        let http = Arc::new(ReqwestHttpClient::with_timeout(config.request_timeout));
        let client = OpenTdbClient::new(config.api_base_url.clone(), http);
        Self::new(config, Arc::new(client))
    }

    /// Start the initial load. Only the first call has any effect.
    pub fn mount(&mut self) -> Option<RequestId> {
        if self.mounted {
            return None;
        }
        self.mounted = true;
        self.mark_dirty();
        Some(self.loader.load(self.config.amount))
    }

    /// Teardown: any in-flight load is cancelled and will never land.
    pub fn unmount(&mut self) {
        self.loader.cancel();
    }

    /// Handle an incoming async message.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::LoadFinished(completion) => {
                if let CompletionOutcome::Loaded(_) = self.loader.complete(completion) {
                    self.list_scroll = 0;
                }
            }
        }
    }

    /// Derived data for the current snapshot and filter.
    pub fn dashboard(&mut self) -> &DashboardView {
        self.composer.view(self.loader.questions(), &self.filter)
    }

    /// Re-fetch after a failure.
    pub fn retry(&mut self) -> RequestId {
        self.mark_dirty();
        self.loader.retry()
    }

    /// Focus on one category. Any string is accepted; an unknown category
    /// filters down to an empty selection.
    pub fn select_category(&mut self, category: impl Into<String>) {
        self.filter.set_category(category);
        self.list_scroll = 0;
        self.mark_dirty();
        debug!("Category filter set to {:?}", self.filter.category());
    }

    pub fn reset_filter(&mut self) {
        self.filter.reset();
        self.list_scroll = 0;
        self.mark_dirty();
    }

    /// Step through the selector options, wrapping at either end.
    ///
    /// A category that is not among the options (e.g. left over from an
    /// earlier snapshot) steps from the start of the list.
    pub fn cycle_category(&mut self, forward: bool) {
        let current = self.filter.category().to_string();
        let options = &self.dashboard().categories;
        if options.is_empty() {
            return;
        }

        let len = options.len();
        let next = match options.iter().position(|c| *c == current) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        let target = options[next].clone();
        self.select_category(target);
    }

    pub fn toggle_list_expanded(&mut self) {
        self.list_expanded = !self.list_expanded;
        self.list_scroll = 0;
        self.mark_dirty();
    }

    /// Move the question list viewport. Clamped to the content during render.
    pub fn scroll_list(&mut self, delta: isize) {
        self.list_scroll = self.list_scroll.saturating_add_signed(delta);
        self.mark_dirty();
    }

    pub fn layout_mode(&self) -> LayoutMode {
        layout_mode(self.terminal_width, self.config.compact_breakpoint)
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        self.mark_dirty();
    }

    /// Advance the animation tick. Only loading shows motion.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        if self.loader.is_loading() && self.tick_count % 6 == 0 {
            self.mark_dirty();
        }
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.unmount();
    }
}

//! Dashboard view composition.
//!
//! Combines the full question snapshot and the active filter into
//! everything the renderer needs. Category data always reflects the full
//! snapshot; difficulty data reflects the filtered subset.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::aggregate::{count_by_category, count_by_default_difficulty};
use crate::filter::{filter_questions, FilterState, ALL_CATEGORY};
use crate::models::{CategoryCount, DifficultyCount, QuestionRecord};

/// Derived data for one (snapshot, filter) pair.
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// Selector options: "All" first, then distinct categories in byte order
    pub categories: Vec<String>,
    /// Questions matching the active filter
    pub filtered: Arc<[QuestionRecord]>,
    /// Distribution over the full snapshot, highest first
    pub by_category: Vec<CategoryCount>,
    /// Distribution over the filtered subset, easy/medium/hard
    pub by_difficulty: Vec<DifficultyCount>,
    pub total_all: usize,
    pub total_filtered: usize,
}

impl DashboardView {
    pub fn is_filtered_empty(&self) -> bool {
        self.total_filtered == 0
    }
}

/// Selector options for a snapshot.
///
/// Empty categories are not selectable, and a data category literally named
/// "All" folds into the sentinel.
pub fn category_options(questions: &[QuestionRecord]) -> Vec<String> {
    let unique: BTreeSet<&str> = questions
        .iter()
        .map(|q| q.category.as_str())
        .filter(|c| !c.is_empty() && *c != ALL_CATEGORY)
        .collect();

    std::iter::once(ALL_CATEGORY)
        .chain(unique)
        .map(str::to_string)
        .collect()
}

/// Compose a view from scratch.
pub fn compose_dashboard(questions: &Arc<[QuestionRecord]>, filter: &FilterState) -> DashboardView {
    let filtered = filter_questions(questions, filter);
    DashboardView {
        categories: category_options(questions),
        by_category: count_by_category(questions),
        by_difficulty: count_by_default_difficulty(&filtered),
        total_all: questions.len(),
        total_filtered: filtered.len(),
        filtered,
    }
}

/// Memoizing composer.
///
/// Full-snapshot parts are rebuilt only when the snapshot identity changes
/// (`Arc::ptr_eq`); filter-dependent parts when either the snapshot or the
/// filter category changes. Anything else reuses the cached view.
#[derive(Debug, Default)]
pub struct DashboardComposer {
    snapshot: Option<Arc<[QuestionRecord]>>,
    filter_category: Option<String>,
    view: Option<DashboardView>,
    full_passes: usize,
    filter_passes: usize,
}

impl DashboardComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the view for `questions` under `filter`, recomputing only what changed.
    pub fn view(&mut self, questions: &Arc<[QuestionRecord]>, filter: &FilterState) -> &DashboardView {
        let snapshot_changed = !self
            .snapshot
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, questions));
        let filter_changed = self.filter_category.as_deref() != Some(filter.category());

        if snapshot_changed || self.view.is_none() {
            self.view = Some(compose_dashboard(questions, filter));
            self.full_passes += 1;
            self.filter_passes += 1;
        } else if filter_changed {
            if let Some(view) = self.view.as_mut() {
                Self::apply_filter(view, questions, filter);
            }
            self.filter_passes += 1;
        }

        self.snapshot = Some(Arc::clone(questions));
        self.filter_category = Some(filter.category().to_string());
        // Always populated by the match above
        self.view.get_or_insert_with(|| compose_dashboard(questions, filter))
    }

    /// How many times the full-snapshot aggregates were rebuilt.
    pub fn full_passes(&self) -> usize {
        self.full_passes
    }

    /// How many times the filter-dependent parts were rebuilt.
    pub fn filter_passes(&self) -> usize {
        self.filter_passes
    }

    fn apply_filter(view: &mut DashboardView, questions: &Arc<[QuestionRecord]>, filter: &FilterState) {
        let filtered = filter_questions(questions, filter);
        view.by_difficulty = count_by_default_difficulty(&filtered);
        view.total_filtered = filtered.len();
        view.filtered = filtered;
    }
}

//! Active category selection and the filter applied to question snapshots.

use std::sync::Arc;

use crate::models::QuestionRecord;

/// Sentinel category meaning "no filter".
pub const ALL_CATEGORY: &str = "All";

/// The user's category selection.
///
/// Any string is accepted; a category that is absent from the loaded data
/// simply filters down to nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    category: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORY.to_string(),
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replace the active category without validation.
    pub fn set_category(&mut self, value: impl Into<String>) {
        self.category = value.into();
    }

    /// Back to [`ALL_CATEGORY`].
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_all_category(&self) -> bool {
        self.category == ALL_CATEGORY
    }

    /// Label used in captions: "all categories" or the category itself.
    pub fn label(&self) -> &str {
        if self.is_all_category() {
            "all categories"
        } else {
            &self.category
        }
    }
}

/// Apply `filter` to a question snapshot.
///
/// With the "All" sentinel the same snapshot is returned (pointer-equal).
/// Otherwise a new snapshot with the exact-match records is built in one
/// pass, preserving order.
pub fn filter_questions(
    questions: &Arc<[QuestionRecord]>,
    filter: &FilterState,
) -> Arc<[QuestionRecord]> {
    if filter.is_all_category() {
        return Arc::clone(questions);
    }
    questions
        .iter()
        .filter(|q| q.category == filter.category())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Arc<[QuestionRecord]> {
        vec![
            QuestionRecord::new("Science", "easy", "Q1"),
            QuestionRecord::new("Science", "hard", "Q2"),
            QuestionRecord::new("Art", "easy", "Q3"),
        ]
        .into()
    }

    #[test]
    fn test_default_is_all() {
        let filter = FilterState::new();
        assert_eq!(filter.category(), ALL_CATEGORY);
        assert!(filter.is_all_category());
        assert_eq!(filter.label(), "all categories");
    }

    #[test]
    fn test_set_and_reset() {
        let mut filter = FilterState::new();
        filter.set_category("Art");
        assert!(!filter.is_all_category());
        assert_eq!(filter.label(), "Art");
        filter.reset();
        assert_eq!(filter, FilterState::default());
    }

    #[test]
    fn test_all_returns_same_snapshot() {
        let questions = snapshot();
        let filtered = filter_questions(&questions, &FilterState::new());
        assert!(Arc::ptr_eq(&questions, &filtered));
    }

    #[test]
    fn test_specific_category_is_exact_match() {
        let questions = snapshot();
        let mut filter = FilterState::new();
        filter.set_category("Science");
        let filtered = filter_questions(&questions, &filter);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|q| q.category == "Science"));

        filter.set_category("science");
        assert!(filter_questions(&questions, &filter).is_empty());
    }

    #[test]
    fn test_unknown_category_yields_empty_set() {
        let mut filter = FilterState::new();
        filter.set_category("Mythology");
        assert!(filter_questions(&snapshot(), &filter).is_empty());
    }
}

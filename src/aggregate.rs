//! Count-by-key summaries over question records.
//!
//! Both functions are pure: they borrow the records, never mutate them, and
//! return a fresh vector on every call.

use std::collections::HashMap;

use crate::models::{CategoryCount, DifficultyCount, QuestionRecord};

/// Difficulty keys in display order.
pub const DIFFICULTY_ORDER: [&str; 3] = ["easy", "medium", "hard"];

/// Count records per category.
///
/// Grouping is an exact, case-sensitive match on the decoded category.
/// Records with an empty category are skipped. The result is sorted by
/// count, highest first; equal counts keep the order in which their
/// category was first seen.
pub fn count_by_category(records: &[QuestionRecord]) -> Vec<CategoryCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<CategoryCount> = Vec::new();

    for record in records {
        let category = record.category.as_str();
        if category.is_empty() {
            continue;
        }
        match index.get(category) {
            Some(&slot) => counts[slot].value += 1,
            None => {
                index.insert(category, counts.len());
                counts.push(CategoryCount::new(category, 1));
            }
        }
    }

    // sort_by is stable, which keeps first-seen order for ties
    counts.sort_by(|a, b| b.value.cmp(&a.value));
    counts
}

/// Count records per difficulty, one entry per key of `order`.
///
/// Difficulties are compared lowercased. Records whose difficulty is not in
/// `order` are ignored. Buckets with no records are present with a zero.
pub fn count_by_difficulty(records: &[QuestionRecord], order: &[&str]) -> Vec<DifficultyCount> {
    let mut counts = vec![0usize; order.len()];

    for record in records {
        let key = record.difficulty.to_lowercase();
        if let Some(slot) = order.iter().position(|k| *k == key) {
            counts[slot] += 1;
        }
    }

    order
        .iter()
        .zip(counts)
        .map(|(key, value)| DifficultyCount::new(key, value))
        .collect()
}

/// [`count_by_difficulty`] with the default easy/medium/hard order.
pub fn count_by_default_difficulty(records: &[QuestionRecord]) -> Vec<DifficultyCount> {
    count_by_difficulty(records, &DIFFICULTY_ORDER)
}

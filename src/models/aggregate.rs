//! Aggregate count types produced by [`crate::aggregate`].

/// Number of questions in one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub name: String,
    pub value: usize,
}

impl CategoryCount {
    pub fn new(name: impl Into<String>, value: usize) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Number of questions at one difficulty level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyCount {
    /// Lowercase difficulty key, e.g. `"easy"`
    pub key: String,
    /// Capitalized key for display, e.g. `"Easy"`
    pub name: String,
    pub value: usize,
}

impl DifficultyCount {
    pub fn new(key: &str, value: usize) -> Self {
        Self {
            key: key.to_string(),
            name: capitalize(key),
            value,
        }
    }
}

/// Uppercase the first character of `s`.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

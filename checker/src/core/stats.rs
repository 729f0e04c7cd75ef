//! Occurrence counts shown alongside a report.

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stat {
    pub label: String,
    pub file: PathBuf,
    /// Substrings whose occurrence counts are summed.
    pub count: Vec<String>,
}

impl Stat {
    pub fn tally(&self, text: &str) -> usize {
        self.count
            .iter()
            .map(|needle| count_occurrences(text, needle))
            .sum()
    }
}

/// Non-overlapping occurrences of `needle`; zero for an empty needle.
pub fn count_occurrences(text: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    text.matches(needle).count()
}

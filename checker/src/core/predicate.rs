//! Containment predicates evaluated against whole-file text.

use regex::Regex;

/// A boolean test over the full text of one input file.
#[derive(Debug, Clone)]
pub enum Predicate {
    /// Exact, case-sensitive substring occurs at least once.
    Contains(String),
    /// Every substring occurs at least once, in any order.
    AllOf(Vec<String>),
    /// Pattern matches at least once. Newline handling is baked into the
    /// compiled regex (see [`compile_pattern`]).
    Matches(Regex),
}

impl Predicate {
    pub fn holds(&self, text: &str) -> bool {
        match self {
            Predicate::Contains(needle) => text.contains(needle.as_str()),
            Predicate::AllOf(needles) => needles.iter().all(|needle| text.contains(needle.as_str())),
            Predicate::Matches(regex) => regex.is_match(text),
        }
    }

    /// Short kind name used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Predicate::Contains(_) => "contains",
            Predicate::AllOf(_) => "all_of",
            Predicate::Matches(_) => "regex",
        }
    }
}

/// Compile a pattern, optionally letting `.` match `\n`.
pub fn compile_pattern(pattern: &str, dot_matches_newline: bool) -> Result<Regex, regex::Error> {
    regex::RegexBuilder::new(pattern)
        .dot_matches_new_line(dot_matches_newline)
        .build()
}

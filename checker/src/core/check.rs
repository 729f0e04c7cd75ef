//! Named checks, their results, and the aggregated report.

use std::path::PathBuf;

use tracing::debug;

use super::predicate::Predicate;

/// A named predicate. Immutable once built from a table.
#[derive(Debug, Clone)]
pub struct Check {
    pub name: String,
    pub predicate: Predicate,
}

impl Check {
    pub fn new(name: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            name: name.into(),
            predicate,
        }
    }

    pub fn evaluate(&self, text: &str) -> CheckResult {
        let passed = self.predicate.holds(text);
        debug!(check = %self.name, kind = self.predicate.kind(), passed, "check result");
        CheckResult {
            name: self.name.clone(),
            passed,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
}

/// Checks that all apply to the same input file.
#[derive(Debug, Clone)]
pub struct Section {
    pub heading: Option<String>,
    pub file: PathBuf,
    pub checks: Vec<Check>,
}

/// Results of one section, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionReport {
    pub heading: Option<String>,
    pub results: Vec<CheckResult>,
}

impl SectionReport {
    pub fn passed(&self) -> bool {
        self.results.iter().all(|result| result.passed)
    }
}

/// Ordered results plus the overall verdict.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub sections: Vec<SectionReport>,
}

impl Report {
    /// Logical AND over every result. Vacuously true when nothing ran.
    pub fn passed(&self) -> bool {
        self.sections.iter().all(SectionReport::passed)
    }

    pub fn results(&self) -> impl Iterator<Item = &CheckResult> {
        self.sections.iter().flat_map(|section| section.results.iter())
    }

    pub fn evaluated(&self) -> usize {
        self.results().count()
    }

    pub fn failed(&self) -> impl Iterator<Item = &CheckResult> {
        self.results().filter(|result| !result.passed)
    }

    pub fn get(&self, name: &str) -> Option<&CheckResult> {
        self.results().find(|result| result.name == name)
    }
}

/// Evaluate every check against `text`. Never stops early.
pub fn evaluate_checks(checks: &[Check], text: &str) -> Vec<CheckResult> {
    checks.iter().map(|check| check.evaluate(text)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::predicate::compile_pattern;

    fn contains(name: &str, needle: &str) -> Check {
        Check::new(name, Predicate::Contains(needle.to_string()))
    }

    #[test]
    fn evaluates_every_check_after_a_failure() {
        let checks = vec![
            contains("first", "missing"),
            contains("second", "present"),
            contains("third", "also missing"),
        ];
        let results = evaluate_checks(&checks, "present");
        let names: Vec<&str> = results.iter().map(|result| result.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
        assert_eq!(
            results.iter().map(|result| result.passed).collect::<Vec<_>>(),
            vec![false, true, false]
        );
    }

    #[test]
    fn overall_is_and_of_all_sections() {
        let css = SectionReport {
            heading: Some("CSS".to_string()),
            results: vec![CheckResult {
                name: "a".to_string(),
                passed: true,
            }],
        };
        let mut html = SectionReport {
            heading: Some("HTML".to_string()),
            results: vec![CheckResult {
                name: "b".to_string(),
                passed: true,
            }],
        };
        let report = Report {
            sections: vec![css.clone(), html.clone()],
        };
        assert!(report.passed());

        html.results[0].passed = false;
        let report = Report {
            sections: vec![css, html],
        };
        assert!(!report.passed());
        assert_eq!(report.evaluated(), 2);
        assert_eq!(report.failed().count(), 1);
    }

    #[test]
    fn stylesheet_scenario_reports_blue_only() {
        let text = "\"#4285F4\" \"linear-gradient(90deg, red, blue)\"";
        let checks = vec![contains("has-blue", "#4285F4"), contains("has-green", "#0F9D58")];
        let report = Report {
            sections: vec![SectionReport {
                heading: None,
                results: evaluate_checks(&checks, text),
            }],
        };
        assert!(!report.passed());
        assert_eq!(report.get("has-blue").map(|r| r.passed), Some(true));
        assert_eq!(report.get("has-green").map(|r| r.passed), Some(false));
    }

    #[test]
    fn regex_check_evaluates_against_multiline_text() {
        let regex = compile_pattern(r"\.font-category\s*\{.*?\}", true).expect("compile");
        let check = Check::new("block", Predicate::Matches(regex));
        assert!(check.evaluate(".font-category {\n  color: red;\n}").passed);
    }
}

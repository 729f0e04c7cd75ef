//! Check table parsing and validation.
//!
//! Tables are TOML files declaring ordered checks per input file plus optional
//! statistics, previews and notes. See `checker/tables/` for the built-in set.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};
use serde::Deserialize;

use crate::core::check::{Check, Section};
use crate::core::note::Note;
use crate::core::predicate::{Predicate, compile_pattern};
use crate::core::preview::{Preview, PreviewMode};
use crate::core::stats::Stat;

/// A table file as written on disk.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TableFile {
    pub table: TableMeta,
    #[serde(default)]
    pub sections: Vec<SectionSpec>,
    #[serde(default)]
    pub stats: Vec<StatSpec>,
    #[serde(default)]
    pub previews: Vec<PreviewSpec>,
    #[serde(default)]
    pub notes: Vec<NoteSpec>,
    #[serde(default)]
    pub summary: SummarySpec,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TableMeta {
    /// Unique identifier (slug format: `[a-z0-9_-]+`).
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub icon: Option<String>,
    /// Width of the `=` separator lines.
    #[serde(default = "default_rule_width")]
    pub rule_width: usize,
}

fn default_rule_width() -> usize {
    60
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SectionSpec {
    #[serde(default)]
    pub heading: Option<String>,
    pub file: PathBuf,
    #[serde(default)]
    pub checks: Vec<CheckSpec>,
}

/// One `[[sections.checks]]` entry, keyed by `type`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum CheckSpec {
    /// Exact substring.
    Contains { name: String, text: String },
    /// Every substring present.
    AllOf { name: String, texts: Vec<String> },
    /// Pattern matches at least once.
    Regex {
        name: String,
        pattern: String,
        #[serde(default)]
        dot_matches_newline: bool,
    },
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StatSpec {
    pub label: String,
    pub file: PathBuf,
    pub count: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PreviewModeSpec {
    #[default]
    Block,
    Inline,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PreviewSpec {
    pub heading: String,
    #[serde(default)]
    pub item_label: Option<String>,
    pub file: PathBuf,
    pub pattern: String,
    #[serde(default)]
    pub dot_matches_newline: bool,
    #[serde(default)]
    pub mode: PreviewModeSpec,
    /// Block mode only; every match is shown when unset.
    #[serde(default)]
    pub max_matches: Option<usize>,
    #[serde(default = "default_max_lines")]
    pub max_lines: usize,
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

fn default_max_lines() -> usize {
    5
}

fn default_max_chars() -> usize {
    200
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct NoteSpec {
    pub label: String,
    pub file: PathBuf,
    pub text: String,
    #[serde(default = "default_present")]
    pub present: String,
    #[serde(default = "default_missing")]
    pub missing: String,
}

fn default_present() -> String {
    "Present".to_string()
}

fn default_missing() -> String {
    "Missing".to_string()
}

/// Text printed after the verdict line when every check passed.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SummarySpec {
    #[serde(default)]
    pub complete: Option<String>,
    #[serde(default)]
    pub bullets: Vec<String>,
}

/// A validated table with compiled predicates, ready to evaluate.
#[derive(Debug, Clone)]
pub struct CheckTable {
    pub id: String,
    pub title: String,
    pub icon: Option<String>,
    pub rule_width: usize,
    pub sections: Vec<Section>,
    pub stats: Vec<Stat>,
    pub previews: Vec<Preview>,
    pub notes: Vec<Note>,
    pub summary: SummarySpec,
}

impl CheckTable {
    /// Load, validate, and compile a table file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).with_context(|| format!("read table {}", path.display()))?;
        Self::parse_str(&contents).with_context(|| format!("table {}", path.display()))
    }

    pub fn parse_str(contents: &str) -> Result<Self> {
        let file: TableFile = toml::from_str(contents).context("parse table")?;
        file.compile()
    }

    /// Every file the table reads, in first-mention order.
    pub fn input_files(&self) -> Vec<PathBuf> {
        let mention_order = self
            .sections
            .iter()
            .map(|section| &section.file)
            .chain(self.stats.iter().map(|stat| &stat.file))
            .chain(self.previews.iter().map(|preview| &preview.file))
            .chain(self.notes.iter().map(|note| &note.file));

        let mut seen = BTreeSet::new();
        let mut files = Vec::new();
        for file in mention_order {
            if seen.insert(file.clone()) {
                files.push(file.clone());
            }
        }
        files
    }

    pub fn check_count(&self) -> usize {
        self.sections.iter().map(|section| section.checks.len()).sum()
    }
}

impl TableFile {
    fn compile(self) -> Result<CheckTable> {
        validate_table_id(&self.table.id)?;
        if self.table.title.trim().is_empty() {
            bail!("table.title must be non-empty");
        }
        if self.table.rule_width == 0 {
            bail!("table.rule_width must be > 0");
        }
        if self.sections.is_empty() {
            bail!("sections must be a non-empty array");
        }

        let sections = self
            .sections
            .into_iter()
            .enumerate()
            .map(|(index, section)| {
                section
                    .compile()
                    .with_context(|| format!("sections[{index}] invalid"))
            })
            .collect::<Result<Vec<_>>>()?;

        let stats = self
            .stats
            .into_iter()
            .enumerate()
            .map(|(index, stat)| {
                stat.compile()
                    .with_context(|| format!("stats[{index}] invalid"))
            })
            .collect::<Result<Vec<_>>>()?;

        let previews = self
            .previews
            .into_iter()
            .enumerate()
            .map(|(index, preview)| {
                preview
                    .compile()
                    .with_context(|| format!("previews[{index}] invalid"))
            })
            .collect::<Result<Vec<_>>>()?;

        let notes = self
            .notes
            .into_iter()
            .enumerate()
            .map(|(index, note)| {
                note.compile()
                    .with_context(|| format!("notes[{index}] invalid"))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(CheckTable {
            id: self.table.id,
            title: self.table.title,
            icon: self.table.icon,
            rule_width: self.table.rule_width,
            sections,
            stats,
            previews,
            notes,
            summary: self.summary,
        })
    }
}

impl SectionSpec {
    fn compile(self) -> Result<Section> {
        validate_file(&self.file)?;
        if self.checks.is_empty() {
            bail!("checks must be a non-empty array");
        }
        let mut names = BTreeSet::new();
        let mut checks = Vec::with_capacity(self.checks.len());
        for (index, spec) in self.checks.into_iter().enumerate() {
            if !names.insert(spec.name().to_string()) {
                bail!("duplicate check name {:?}", spec.name());
            }
            checks.push(
                spec.compile()
                    .with_context(|| format!("checks[{index}] invalid"))?,
            );
        }
        Ok(Section {
            heading: self.heading,
            file: self.file,
            checks,
        })
    }
}

impl CheckSpec {
    pub fn name(&self) -> &str {
        match self {
            CheckSpec::Contains { name, .. }
            | CheckSpec::AllOf { name, .. }
            | CheckSpec::Regex { name, .. } => name,
        }
    }

    fn compile(self) -> Result<Check> {
        if self.name().trim().is_empty() {
            bail!("check name must be non-empty");
        }
        let (name, predicate) = match self {
            CheckSpec::Contains { name, text } => {
                if text.is_empty() {
                    bail!("contains.text must be non-empty");
                }
                (name, Predicate::Contains(text))
            }
            CheckSpec::AllOf { name, texts } => {
                if texts.len() < 2 {
                    bail!("all_of.texts must list at least two strings");
                }
                if texts.iter().any(String::is_empty) {
                    bail!("all_of.texts entries must be non-empty");
                }
                (name, Predicate::AllOf(texts))
            }
            CheckSpec::Regex {
                name,
                pattern,
                dot_matches_newline,
            } => (
                name,
                Predicate::Matches(
                    compile_pattern(&pattern, dot_matches_newline)
                        .map_err(|err| anyhow!("regex.pattern invalid: {err}"))?,
                ),
            ),
        };
        Ok(Check::new(name, predicate))
    }
}

impl StatSpec {
    fn compile(self) -> Result<Stat> {
        validate_file(&self.file)?;
        if self.label.trim().is_empty() {
            bail!("stat label must be non-empty");
        }
        if self.count.is_empty() || self.count.iter().any(String::is_empty) {
            bail!("stat count must be a non-empty array of non-empty strings");
        }
        Ok(Stat {
            label: self.label,
            file: self.file,
            count: self.count,
        })
    }
}

impl PreviewSpec {
    fn compile(self) -> Result<Preview> {
        validate_file(&self.file)?;
        if self.heading.trim().is_empty() {
            bail!("preview heading must be non-empty");
        }
        let mode = match self.mode {
            PreviewModeSpec::Block => {
                if self.max_matches == Some(0) || self.max_lines == 0 {
                    bail!("preview max_matches and max_lines must be > 0");
                }
                PreviewMode::Block {
                    max_matches: self.max_matches,
                    max_lines: self.max_lines,
                }
            }
            PreviewModeSpec::Inline => {
                if self.max_chars == 0 {
                    bail!("preview max_chars must be > 0");
                }
                PreviewMode::Inline {
                    max_chars: self.max_chars,
                }
            }
        };
        let pattern = compile_pattern(&self.pattern, self.dot_matches_newline)
            .map_err(|err| anyhow!("preview pattern invalid: {err}"))?;
        Ok(Preview {
            heading: self.heading,
            item_label: self.item_label,
            file: self.file,
            pattern,
            mode,
        })
    }
}

impl NoteSpec {
    fn compile(self) -> Result<Note> {
        validate_file(&self.file)?;
        if self.label.trim().is_empty() || self.text.is_empty() {
            bail!("note label and text must be non-empty");
        }
        Ok(Note {
            label: self.label,
            file: self.file,
            text: self.text,
            present: self.present,
            missing: self.missing,
        })
    }
}

/// Discover and load all table files from a directory.
///
/// Returns tables sorted by id. Errors if duplicate ids are found.
pub fn discover_tables(dir: &Path) -> Result<Vec<CheckTable>> {
    if !dir.exists() {
        return Ok(Vec::new());
    }
    let mut tables = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("read tables dir {}", dir.display()))? {
        let entry = entry.context("read table entry")?;
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("toml") {
            continue;
        }
        tables.push(CheckTable::load(&path)?);
    }
    tables.sort_by(|left, right| left.id.cmp(&right.id));
    for pair in tables.windows(2) {
        if pair[0].id == pair[1].id {
            return Err(anyhow!("duplicate table.id {}", pair[0].id));
        }
    }
    Ok(tables)
}

fn validate_table_id(id: &str) -> Result<()> {
    if id.trim().is_empty() {
        bail!("table.id must be non-empty");
    }
    if id.contains('/') || id.contains('\\') {
        bail!("table.id must not contain path separators");
    }
    if id.contains("..") {
        bail!("table.id must not contain '..'");
    }
    if !id
        .chars()
        .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-' || ch == '_')
    {
        bail!("table.id must use [a-z0-9_-] only");
    }
    Ok(())
}

fn validate_file(file: &Path) -> Result<()> {
    if file.as_os_str().is_empty() {
        bail!("file must be non-empty");
    }
    if file.is_absolute() {
        bail!("file must be relative to the site root");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAVICON: &str = r#"
[table]
id = "favicon-lite"
title = "Favicon"

[[sections]]
file = "index.html"

[[sections.checks]]
name = "Favicon link present"
type = "contains"
text = 'rel="icon"'

[[sections.checks]]
name = "Both colors"
type = "all_of"
texts = ["%234285F4", "%239932CC"]

[[sections.checks]]
name = "Favicon tag"
type = "regex"
pattern = '<link rel="icon".*?>'
dot_matches_newline = true

[[previews]]
heading = "Favicon Code Preview"
file = "index.html"
pattern = '<link rel="icon".*?>'
mode = "inline"

[[notes]]
label = "Documentation"
file = "index.html"
text = "Gradient Favicon"
"#;

    #[test]
    fn parses_valid_table() {
        let table = CheckTable::parse_str(FAVICON).expect("table parses");
        assert_eq!(table.id, "favicon-lite");
        assert_eq!(table.rule_width, 60);
        assert_eq!(table.check_count(), 3);
        assert!(matches!(
            table.sections[0].checks[1].predicate,
            Predicate::AllOf(ref texts) if texts.len() == 2
        ));
        assert_eq!(
            table.previews[0].mode,
            PreviewMode::Inline { max_chars: 200 }
        );
        assert_eq!(table.notes[0].present, "Present");
        assert_eq!(table.input_files(), vec![PathBuf::from("index.html")]);
    }

    #[test]
    fn input_files_keep_first_mention_order() {
        let input = r#"
[table]
id = "two-files"
title = "Two files"

[[sections]]
file = "styles.css"
[[sections.checks]]
name = "a"
type = "contains"
text = "a"

[[sections]]
file = "index.html"
[[sections.checks]]
name = "b"
type = "contains"
text = "b"

[[stats]]
label = "count"
file = "styles.css"
count = ["a"]
"#;
        let table = CheckTable::parse_str(input).expect("table parses");
        assert_eq!(
            table.input_files(),
            vec![PathBuf::from("styles.css"), PathBuf::from("index.html")]
        );
    }

    #[test]
    fn rejects_invalid_id() {
        let input = FAVICON.replace("favicon-lite", "bad/id");
        let err = CheckTable::parse_str(&input).expect_err("invalid id");
        assert!(err.to_string().contains("table.id"));
    }

    #[test]
    fn rejects_single_entry_all_of() {
        let input = FAVICON.replace(r#"["%234285F4", "%239932CC"]"#, r#"["%234285F4"]"#);
        let err = CheckTable::parse_str(&input).expect_err("all_of too short");
        assert!(format!("{err:#}").contains("at least two"));
    }

    #[test]
    fn rejects_bad_regex() {
        let input = FAVICON.replace(r#"pattern = '<link rel="icon".*?>'
dot_matches_newline = true"#, r#"pattern = '<link ('"#);
        let err = CheckTable::parse_str(&input).expect_err("bad regex");
        assert!(format!("{err:#}").contains("regex.pattern invalid"));
    }

    #[test]
    fn rejects_duplicate_check_names() {
        let input = FAVICON.replace("Both colors", "Favicon link present");
        let err = CheckTable::parse_str(&input).expect_err("duplicate name");
        assert!(format!("{err:#}").contains("duplicate check name"));
    }

    #[test]
    fn rejects_unknown_check_type() {
        let input = FAVICON.replace(r#"type = "contains""#, r#"type = "starts_with""#);
        let err = CheckTable::parse_str(&input).expect_err("unknown type");
        assert!(format!("{err:#}").contains("unknown variant"));
    }

    #[test]
    fn rejects_misspelled_check_key() {
        let input = FAVICON.replace(
            "dot_matches_newline = true",
            "dot_matches_new_line = true",
        );
        assert_ne!(input, FAVICON);
        let err = CheckTable::parse_str(&input).expect_err("misspelled key");
        assert!(format!("{err:#}").contains("unknown field"));
    }

    #[test]
    fn rejects_key_from_another_check_type() {
        let input = FAVICON.replace(
            r#"type = "contains""#,
            "type = \"contains\"\npattern = \"x\"",
        );
        let err = CheckTable::parse_str(&input).expect_err("foreign key");
        assert!(format!("{err:#}").contains("unknown field"));
    }

    #[test]
    fn discovers_tables_sorted_and_skips_other_files() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("b.toml"), FAVICON.replace("favicon-lite", "zeta"))
            .expect("write b");
        fs::write(temp.path().join("a.toml"), FAVICON.replace("favicon-lite", "alpha"))
            .expect("write a");
        fs::write(temp.path().join("notes.md"), "ignored").expect("write md");

        let tables = discover_tables(temp.path()).expect("discover");
        let ids: Vec<&str> = tables.iter().map(|table| table.id.as_str()).collect();
        assert_eq!(ids, vec!["alpha", "zeta"]);
    }

    #[test]
    fn discover_rejects_duplicate_ids() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("a.toml"), FAVICON).expect("write a");
        fs::write(temp.path().join("b.toml"), FAVICON).expect("write b");

        let err = discover_tables(temp.path()).expect_err("duplicate");
        assert!(err.to_string().contains("duplicate table.id"));
    }

    #[test]
    fn missing_tables_dir_is_empty() {
        let temp = tempfile::tempdir().expect("tempdir");
        let tables = discover_tables(&temp.path().join("checks")).expect("discover");
        assert!(tables.is_empty());
    }
}

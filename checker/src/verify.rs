//! One verification run: load inputs, evaluate every check, aggregate.

use std::path::Path;

use tracing::{info, instrument, warn};

use crate::core::check::{Report, SectionReport, evaluate_checks};
use crate::core::note::NoteOutcome;
use crate::core::preview::Excerpt;
use crate::exit_codes;
use crate::io::inputs::{InputError, SiteFiles, load_inputs};
use crate::io::table::CheckTable;

/// A counted statistic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatOutcome {
    pub label: String,
    pub count: usize,
}

/// Excerpts gathered for one preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOutcome {
    pub heading: String,
    pub item_label: Option<String>,
    pub excerpts: Vec<Excerpt>,
}

/// Everything a run produced. When inputs failed to load, `report` is empty
/// and no predicate was evaluated.
#[derive(Debug)]
pub struct Verification {
    pub table_id: String,
    pub report: Report,
    pub stats: Vec<StatOutcome>,
    pub previews: Vec<PreviewOutcome>,
    pub notes: Vec<NoteOutcome>,
    pub input_error: Option<InputError>,
}

impl Verification {
    pub fn passed(&self) -> bool {
        self.input_error.is_none() && self.report.passed()
    }

    pub fn exit_code(&self) -> i32 {
        if self.input_error.is_some() {
            exit_codes::INVALID
        } else if self.report.passed() {
            exit_codes::OK
        } else {
            exit_codes::FAILED
        }
    }

    fn aborted(table_id: &str, err: InputError) -> Self {
        Self {
            table_id: table_id.to_string(),
            report: Report::default(),
            stats: Vec::new(),
            previews: Vec::new(),
            notes: Vec::new(),
            input_error: Some(err),
        }
    }
}

/// Run `table` against the site files under `site_root`.
#[instrument(skip_all, fields(table = %table.id, check_count = table.check_count()))]
pub fn verify(table: &CheckTable, site_root: &Path) -> Verification {
    let files = match load_inputs(site_root, &table.input_files()) {
        Ok(files) => files,
        Err(err) => {
            warn!(file = %err.path().display(), error = %err, "inputs unavailable");
            return Verification::aborted(&table.id, err);
        }
    };

    match evaluate_table(table, &files) {
        Ok(verification) => {
            info!(
                passed = verification.passed(),
                evaluated = verification.report.evaluated(),
                failed = verification.report.failed().count(),
                "verification finished"
            );
            verification
        }
        Err(err) => Verification::aborted(&table.id, err),
    }
}

fn evaluate_table(table: &CheckTable, files: &SiteFiles) -> Result<Verification, InputError> {
    let mut sections = Vec::with_capacity(table.sections.len());
    for section in &table.sections {
        let text = text_for(files, &section.file)?;
        sections.push(SectionReport {
            heading: section.heading.clone(),
            results: evaluate_checks(&section.checks, text),
        });
    }

    let mut stats = Vec::with_capacity(table.stats.len());
    for stat in &table.stats {
        stats.push(StatOutcome {
            label: stat.label.clone(),
            count: stat.tally(text_for(files, &stat.file)?),
        });
    }

    let mut previews = Vec::with_capacity(table.previews.len());
    for preview in &table.previews {
        previews.push(PreviewOutcome {
            heading: preview.heading.clone(),
            item_label: preview.item_label.clone(),
            excerpts: preview.extract(text_for(files, &preview.file)?),
        });
    }

    let mut notes = Vec::with_capacity(table.notes.len());
    for note in &table.notes {
        notes.push(note.observe(text_for(files, &note.file)?));
    }

    Ok(Verification {
        table_id: table.id.clone(),
        report: Report { sections },
        stats,
        previews,
        notes,
        input_error: None,
    })
}

fn text_for<'a>(files: &'a SiteFiles, file: &Path) -> Result<&'a str, InputError> {
    files.text(file).ok_or_else(|| InputError::Missing {
        path: file.to_path_buf(),
    })
}

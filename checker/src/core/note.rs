//! Informational presence lines (e.g. "Documentation: ✅ Present").

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub label: String,
    pub file: PathBuf,
    pub text: String,
    pub present: String,
    pub missing: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteOutcome {
    pub label: String,
    pub found: bool,
    pub status: String,
}

impl Note {
    pub fn observe(&self, text: &str) -> NoteOutcome {
        let found = text.contains(self.text.as_str());
        let status = if found { &self.present } else { &self.missing };
        NoteOutcome {
            label: self.label.clone(),
            found,
            status: status.clone(),
        }
    }
}

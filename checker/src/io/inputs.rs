//! Whole-file loading of the site's markup and stylesheet.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Why the inputs for a run could not be loaded. Fatal for that run.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// A required file does not exist. Raised before any file is read.
    #[error("{} not found!", .path.display())]
    Missing { path: PathBuf },
    #[error("read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid UTF-8", .path.display())]
    NotUtf8 { path: PathBuf },
}

impl InputError {
    pub fn path(&self) -> &Path {
        match self {
            InputError::Missing { path }
            | InputError::Read { path, .. }
            | InputError::NotUtf8 { path } => path,
        }
    }
}

/// Immutable text snapshot of every input file, keyed by the table's relative path.
#[derive(Debug, Default)]
pub struct SiteFiles {
    texts: BTreeMap<PathBuf, String>,
}

impl SiteFiles {
    pub fn text(&self, file: &Path) -> Option<&str> {
        self.texts.get(file).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }
}

/// Load `files` relative to `root`.
///
/// Existence of every file is checked first, in order, so a missing file
/// fails the load without reading anything.
pub fn load_inputs(root: &Path, files: &[PathBuf]) -> Result<SiteFiles, InputError> {
    for file in files {
        if !root.join(file).is_file() {
            return Err(InputError::Missing { path: file.clone() });
        }
    }

    let mut texts = BTreeMap::new();
    for file in files {
        let full_path = root.join(file);
        let bytes = fs::read(&full_path).map_err(|source| InputError::Read {
            path: file.clone(),
            source,
        })?;
        let text =
            String::from_utf8(bytes).map_err(|_| InputError::NotUtf8 { path: file.clone() })?;
        debug!(file = %file.display(), bytes = text.len(), "input loaded");
        texts.insert(file.clone(), text);
    }
    Ok(SiteFiles { texts })
}

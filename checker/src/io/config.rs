//! Checker configuration stored in `showcase-check.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Default config file name, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "showcase-check.toml";

/// Checker configuration (TOML).
///
/// Missing fields default to checking the working directory with extra
/// tables under `checks/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CheckerConfig {
    /// Directory holding `index.html` and `styles.css`.
    pub site_root: PathBuf,

    /// Directory scanned for additional `*.toml` check tables.
    pub tables_dir: PathBuf,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            site_root: PathBuf::from("."),
            tables_dir: PathBuf::from("checks"),
        }
    }
}

impl CheckerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.site_root.as_os_str().is_empty() {
            return Err(anyhow!("site_root must be non-empty"));
        }
        if self.tables_dir.as_os_str().is_empty() {
            return Err(anyhow!("tables_dir must be non-empty"));
        }
        Ok(())
    }

    /// Resolve relative directories against `base` (the config file's directory).
    pub fn resolved(mut self, base: &Path) -> Self {
        if self.site_root.is_relative() {
            self.site_root = base.join(&self.site_root);
        }
        if self.tables_dir.is_relative() {
            self.tables_dir = base.join(&self.tables_dir);
        }
        self
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `CheckerConfig::default()`.
pub fn load_config(path: &Path) -> Result<CheckerConfig> {
    if !path.exists() {
        let cfg = CheckerConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CheckerConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(cfg)
}

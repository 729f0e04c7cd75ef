//! Built-in check tables and table lookup.
//!
//! The five site verifications ship embedded in the binary. Extra tables can
//! be dropped into the configured tables directory or passed as a path.

use std::path::Path;

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::io::table::{CheckTable, discover_tables};

/// Built-in tables in the order `all` runs them.
static BUILTIN: [(&str, &str); 5] = [
    ("gradient", include_str!("../tables/gradient.toml")),
    ("blue-violet", include_str!("../tables/blue-violet.toml")),
    ("card-tags", include_str!("../tables/card-tags.toml")),
    ("favicon", include_str!("../tables/favicon.toml")),
    ("footer", include_str!("../tables/footer.toml")),
];

pub fn builtin_ids() -> impl Iterator<Item = &'static str> {
    BUILTIN.iter().map(|(id, _)| *id)
}

/// Parse one built-in table; `Ok(None)` when `id` is not built in.
pub fn builtin(id: &str) -> Result<Option<CheckTable>> {
    let Some((_, source)) = BUILTIN.iter().find(|(builtin_id, _)| *builtin_id == id) else {
        return Ok(None);
    };
    let table =
        CheckTable::parse_str(source).with_context(|| format!("built-in table {id}"))?;
    Ok(Some(table))
}

pub fn builtin_tables() -> Result<Vec<CheckTable>> {
    BUILTIN
        .iter()
        .map(|(id, source)| {
            CheckTable::parse_str(source).with_context(|| format!("built-in table {id}"))
        })
        .collect()
}

/// Tables from `tables_dir`, rejecting ids that shadow a built-in.
pub fn custom_tables(tables_dir: &Path) -> Result<Vec<CheckTable>> {
    let tables = discover_tables(tables_dir)?;
    for table in &tables {
        if builtin_ids().any(|id| id == table.id) {
            bail!(
                "table {} in {} shadows a built-in table",
                table.id,
                tables_dir.display()
            );
        }
    }
    Ok(tables)
}

/// Resolve a table by path (`*.toml`), built-in id, or id under `tables_dir`.
pub fn resolve(name: &str, tables_dir: &Path) -> Result<CheckTable> {
    if name.ends_with(".toml") {
        debug!(path = name, "loading table from path");
        return CheckTable::load(Path::new(name));
    }
    if let Some(table) = builtin(name)? {
        debug!(table = name, "using built-in table");
        return Ok(table);
    }
    let path = tables_dir.join(format!("{name}.toml"));
    if path.is_file() {
        let table = CheckTable::load(&path)?;
        if table.id != name {
            bail!(
                "table id {} does not match file name {}",
                table.id,
                path.display()
            );
        }
        debug!(table = name, path = %path.display(), "using custom table");
        return Ok(table);
    }
    bail!(
        "unknown table {name} (built-in: {})",
        builtin_ids().collect::<Vec<_>>().join(", ")
    )
}

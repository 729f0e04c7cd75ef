//! One-time repair of the showcase page script.
//!
//! Removes the stray `}` left after the weight-tooltip helper in `index.html`.
//! Safe to rerun: an already repaired file is left as is.

mod repair;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use checker::exit_codes;
use clap::Parser;
use tracing::{info, warn};

use crate::repair::{Repair, remove_stray_brace};

#[derive(Parser)]
#[command(
    name = "site-fix",
    version,
    about = "Remove the stray brace after the weight-tooltip helper"
)]
struct Cli {
    /// Markup file to repair.
    #[arg(long, default_value = "index.html")]
    file: PathBuf,

    /// Report the change without writing it.
    #[arg(long)]
    dry_run: bool,
}

fn main() {
    checker::logging::init();
    let cli = Cli::parse();
    match run(&cli.file, cli.dry_run) {
        Ok(()) => std::process::exit(exit_codes::OK),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run(file: &Path, dry_run: bool) -> Result<()> {
    if !file.is_file() {
        anyhow::bail!("❌ {} not found!", file.display());
    }
    let content = fs::read_to_string(file).with_context(|| format!("read {}", file.display()))?;

    match remove_stray_brace(&content) {
        Repair::Fixed {
            line,
            removed,
            content,
        } => {
            info!(file = %file.display(), line, removed = %removed.trim(), dry_run, "stray brace found");
            if dry_run {
                println!("Would remove line {line}: {}", removed.trim());
                return Ok(());
            }
            fs::write(file, content).with_context(|| format!("write {}", file.display()))?;
            println!("✅ Syntax error fixed! Removed stray brace at line {line}.");
        }
        Repair::AlreadyClean => {
            info!(file = %file.display(), "no stray brace");
            println!("Nothing to fix: weight-tooltip helper is already well-formed.");
        }
        Repair::HelperNotFound => {
            warn!(file = %file.display(), "weight-tooltip helper not found");
            println!("Nothing to fix: weight-tooltip helper not found.");
        }
    }
    Ok(())
}

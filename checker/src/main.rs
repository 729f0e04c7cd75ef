//! Content checks for the Google Fonts Showcase site.
//!
//! Each table verifies that a feature landed in `index.html`/`styles.css` and
//! prints a pass/fail report. Exit code 0 means every check passed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use checker::exit_codes;
use checker::io::config::{CheckerConfig, DEFAULT_CONFIG_FILE, load_config};
use checker::io::table::CheckTable;
use checker::render::render_report;
use checker::tables::{builtin_ids, builtin_tables, custom_tables, resolve};
use checker::verify::verify;
use clap::{Parser, Subcommand};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "showcase-check",
    version,
    about = "Content checks for the Google Fonts Showcase site"
)]
struct Cli {
    /// Checker config file (optional; defaults apply when missing).
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List built-in and custom table ids.
    List,
    /// Run one or more tables by id or `.toml` path.
    Check {
        #[arg(required = true)]
        tables: Vec<String>,
    },
    /// Run every built-in table.
    All,
}

fn main() {
    checker::logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::INVALID);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    let config = load_checker_config(&cli.config)?;
    match cli.command {
        Command::List => cmd_list(&config),
        Command::Check { tables } => {
            let tables = tables
                .iter()
                .map(|name| resolve(name, &config.tables_dir))
                .collect::<Result<Vec<_>>>()?;
            Ok(run_tables(&tables, &config.site_root))
        }
        Command::All => {
            let tables = builtin_tables()?;
            Ok(run_tables(&tables, &config.site_root))
        }
    }
}

fn load_checker_config(path: &Path) -> Result<CheckerConfig> {
    let base = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let config = load_config(path)
        .with_context(|| format!("load config {}", path.display()))?
        .resolved(base);
    debug!(
        site_root = %config.site_root.display(),
        tables_dir = %config.tables_dir.display(),
        "config loaded"
    );
    Ok(config)
}

fn cmd_list(config: &CheckerConfig) -> Result<i32> {
    for id in builtin_ids() {
        println!("{id}");
    }
    for table in custom_tables(&config.tables_dir)? {
        println!("{}", table.id);
    }
    Ok(exit_codes::OK)
}

/// Run every table, print each report, and return the worst exit code.
fn run_tables(tables: &[CheckTable], site_root: &Path) -> i32 {
    let mut code = exit_codes::OK;
    for (index, table) in tables.iter().enumerate() {
        if index > 0 {
            println!();
        }
        let verification = verify(table, site_root);
        print!("{}", render_report(table, &verification));
        code = code.max(verification.exit_code());
    }
    code
}

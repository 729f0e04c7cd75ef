//! CLI tests for `showcase-check`.
//!
//! Spawns the binary against temporary sites and verifies exit codes and
//! report output for passing, failing, and missing-input runs.

use std::process::{Command, Output};

use checker::exit_codes;
use checker::test_support::{INDEX_HTML, STYLES_CSS, TestSite};

fn showcase_check(site: &TestSite, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_showcase-check"))
        .current_dir(site.root())
        .args(args)
        .output()
        .expect("showcase-check")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn all_passes_on_complete_site() {
    let site = TestSite::showcase().expect("site");
    let output = showcase_check(&site, &["all"]);

    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let text = stdout(&output);
    assert_eq!(text.matches("🎉 ALL CHECKS PASSED!").count(), 5);
    assert!(!text.contains(": FAIL"));
}

#[test]
fn failed_check_exits_with_failed_code() {
    let site = TestSite::new().expect("site");
    site.write("index.html", INDEX_HTML.replace("linearGradient", "radialGradient"))
        .expect("write html");
    let output = showcase_check(&site, &["check", "favicon"]);

    assert_eq!(output.status.code(), Some(exit_codes::FAILED));
    let text = stdout(&output);
    assert_eq!(text.matches(": FAIL").count(), 1);
    assert!(text.contains("❌ Gradient definition: FAIL"));
}

#[test]
fn missing_stylesheet_exits_invalid_without_results() {
    let site = TestSite::new().expect("site");
    site.write("index.html", INDEX_HTML).expect("write html");
    let output = showcase_check(&site, &["check", "gradient"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let text = stdout(&output);
    assert!(text.contains("❌ styles.css not found!"));
    assert!(!text.contains(": PASS"));
    assert!(!text.contains(": FAIL"));
}

#[test]
fn worst_code_wins_across_tables() {
    let site = TestSite::new().expect("site");
    site.write("styles.css", STYLES_CSS.replace("#DB4437", "#FF0000"))
        .expect("write css");
    let output = showcase_check(&site, &["check", "blue-violet", "gradient", "favicon"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let text = stdout(&output);
    assert!(text.contains("🎉 ALL CHECKS PASSED! Blue-Violet gradient implementation is complete."));
    assert!(text.contains("❌ Google Red (#DB4437): FAIL"));
    assert!(text.contains("❌ index.html not found!"));
}

#[test]
fn unknown_table_is_invalid() {
    let site = TestSite::showcase().expect("site");
    let output = showcase_check(&site, &["check", "sparkles"]);

    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(String::from_utf8_lossy(&output.stderr).contains("unknown table sparkles"));
    assert!(output.stdout.is_empty());
}

#[test]
fn custom_tables_are_listed_and_runnable() {
    let site = TestSite::showcase().expect("site");
    site.write(
        "checks/theme.toml",
        r#"
[table]
id = "theme"
title = "Theme"

[[sections]]
file = "styles.css"

[[sections.checks]]
name = "Dark h1 rule"
type = "regex"
pattern = '\.dark-theme h1\s*\{.*?#DDA0DD.*?\}'
dot_matches_newline = true
"#,
    )
    .expect("write table");

    let listed = stdout(&showcase_check(&site, &["list"]));
    let ids: Vec<&str> = listed.lines().collect();
    assert_eq!(
        ids,
        vec!["gradient", "blue-violet", "card-tags", "favicon", "footer", "theme"]
    );

    let output = showcase_check(&site, &["check", "theme"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout(&output).contains("✅ Dark h1 rule: PASS"));
}

#[test]
fn config_points_at_site_root() {
    let site = TestSite::new().expect("site");
    site.write("public/index.html", INDEX_HTML).expect("write html");
    site.write("public/styles.css", STYLES_CSS).expect("write css");
    site.write("showcase-check.toml", "site_root = \"public\"\n")
        .expect("write config");

    let output = showcase_check(&site, &["check", "footer"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(site.read("public/styles.css").expect("read css"), STYLES_CSS);
}

//! Human-readable report text.

use std::fmt;

use crate::io::table::CheckTable;
use crate::verify::Verification;

const SECTION_RULE_WIDTH: usize = 30;

/// Render the full report for one verification run.
pub fn render_report(table: &CheckTable, verification: &Verification) -> String {
    let mut out = String::new();
    let rule = "=".repeat(table.rule_width);

    match &table.icon {
        Some(icon) => line(&mut out, format_args!("{icon} {}", table.title)),
        None => line(&mut out, format_args!("{}", table.title)),
    }
    line(&mut out, format_args!("{rule}"));

    if let Some(err) = &verification.input_error {
        line(&mut out, format_args!("❌ {err}"));
        write_verdict(&mut out, table, verification, &rule);
        return out;
    }

    for (index, section) in verification.report.sections.iter().enumerate() {
        if let Some(heading) = &section.heading {
            if index > 0 {
                out.push('\n');
            }
            line(&mut out, format_args!("{heading}:"));
            line(&mut out, format_args!("{}", "-".repeat(SECTION_RULE_WIDTH)));
        }
        for result in &section.results {
            let (marker, verdict) = if result.passed {
                ("✅", "PASS")
            } else {
                ("❌", "FAIL")
            };
            line(&mut out, format_args!("{marker} {}: {verdict}", result.name));
        }
    }

    out.push('\n');
    line(&mut out, format_args!("{rule}"));

    if !verification.stats.is_empty() {
        line(&mut out, format_args!("📊 Statistics:"));
        for stat in &verification.stats {
            line(&mut out, format_args!("   • {}: {}", stat.label, stat.count));
        }
    }

    for preview in &verification.previews {
        if preview.excerpts.is_empty() {
            continue;
        }
        out.push('\n');
        line(&mut out, format_args!("{}:", preview.heading));
        for (index, excerpt) in preview.excerpts.iter().enumerate() {
            let indent = match &preview.item_label {
                Some(label) => {
                    out.push('\n');
                    line(&mut out, format_args!("   {label} {}:", index + 1));
                    "     "
                }
                None => "   ",
            };
            for text in &excerpt.lines {
                line(&mut out, format_args!("{indent}{text}"));
            }
            if excerpt.omitted_lines > 0 {
                line(
                    &mut out,
                    format_args!("{indent}... ({} more lines)", excerpt.omitted_lines),
                );
            }
        }
    }

    for note in &verification.notes {
        let marker = if note.found { "✅" } else { "❌" };
        out.push('\n');
        line(
            &mut out,
            format_args!("📝 {}: {marker} {}", note.label, note.status),
        );
    }

    write_verdict(&mut out, table, verification, &rule);
    out
}

fn write_verdict(out: &mut String, table: &CheckTable, verification: &Verification, rule: &str) {
    out.push('\n');
    line(out, format_args!("{rule}"));
    if !verification.passed() {
        line(
            out,
            format_args!("⚠️  Some checks failed. Please review the implementation."),
        );
        return;
    }
    match &table.summary.complete {
        Some(complete) => line(out, format_args!("🎉 ALL CHECKS PASSED! {complete}")),
        None => line(out, format_args!("🎉 ALL CHECKS PASSED!")),
    }
    if !table.summary.bullets.is_empty() {
        out.push('\n');
        line(out, format_args!("📝 Summary:"));
        for bullet in &table.summary.bullets {
            line(out, format_args!("   • {bullet}"));
        }
    }
}

fn line(out: &mut String, args: fmt::Arguments<'_>) {
    out.push_str(&args.to_string());
    out.push('\n');
}

//! Removal of the stray closing brace after the weight-tooltip helper.
//!
//! A bad edit left a lone `}` right after `getWeightTooltip`'s closing brace,
//! which closes the surrounding loop early and breaks the page script.

/// Line that opens the helper whose trailing brace is doubled.
const HELPER_MARKER: &str = "function getWeightTooltip(";

/// What [`remove_stray_brace`] decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Repair {
    /// The stray line was dropped. `line` is 1-based in the original text.
    Fixed {
        line: usize,
        removed: String,
        content: String,
    },
    /// The helper is not in the file.
    HelperNotFound,
    /// The helper is present and already well-formed.
    AlreadyClean,
}

/// Drop the lone `}` that follows the helper's closing brace.
///
/// The helper's closing brace is the first later line equal to the helper
/// line's indentation followed by `}`. The stray brace is the next line when
/// it is a lone `}` indented deeper than that. Nothing else is touched.
pub fn remove_stray_brace(content: &str) -> Repair {
    let lines: Vec<&str> = content.split('\n').collect();

    let Some(start) = lines.iter().position(|line| line.contains(HELPER_MARKER)) else {
        return Repair::HelperNotFound;
    };
    let indent = leading_whitespace(lines[start]);
    let closing = format!("{indent}}}");

    let Some(end) = lines[start + 1..]
        .iter()
        .position(|line| line.trim_end() == closing)
        .map(|offset| start + 1 + offset)
    else {
        return Repair::AlreadyClean;
    };

    let stray = end + 1;
    match lines.get(stray) {
        Some(line) if line.trim() == "}" && leading_whitespace(line).len() > indent.len() => {
            let removed = (*line).to_string();
            let kept: Vec<&str> = lines
                .iter()
                .enumerate()
                .filter(|(index, _)| *index != stray)
                .map(|(_, line)| *line)
                .collect();
            Repair::Fixed {
                line: stray + 1,
                removed,
                content: kept.join("\n"),
            }
        }
        _ => Repair::AlreadyClean,
    }
}

fn leading_whitespace(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

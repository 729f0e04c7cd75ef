//! Bounded previews of matched regions. Presentation only; never part of a verdict.

use std::path::PathBuf;

use regex::Regex;

/// How matched text is condensed for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewMode {
    /// First `max_matches` matches (all when unset), each cut to its first
    /// `max_lines` lines.
    Block {
        max_matches: Option<usize>,
        max_lines: usize,
    },
    /// First match only, flattened to one line and cut to `max_chars`.
    Inline { max_chars: usize },
}

#[derive(Debug, Clone)]
pub struct Preview {
    pub heading: String,
    /// Per-match label in block mode ("Gradient" renders as "Gradient 1:").
    pub item_label: Option<String>,
    pub file: PathBuf,
    pub pattern: Regex,
    pub mode: PreviewMode,
}

/// One excerpted match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Excerpt {
    pub lines: Vec<String>,
    /// Lines beyond the block limit that were not shown.
    pub omitted_lines: usize,
}

impl Preview {
    /// Excerpts for `text`; empty when the pattern never matches.
    pub fn extract(&self, text: &str) -> Vec<Excerpt> {
        match self.mode {
            PreviewMode::Block {
                max_matches,
                max_lines,
            } => self
                .pattern
                .find_iter(text)
                .take(max_matches.unwrap_or(usize::MAX))
                .map(|found| block_excerpt(found.as_str(), max_lines))
                .collect(),
            PreviewMode::Inline { max_chars } => self
                .pattern
                .find(text)
                .map(|found| inline_excerpt(found.as_str(), max_chars))
                .into_iter()
                .collect(),
        }
    }
}

fn block_excerpt(matched: &str, max_lines: usize) -> Excerpt {
    let lines: Vec<&str> = matched.trim().split('\n').collect();
    let shown = lines
        .iter()
        .take(max_lines)
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    Excerpt {
        lines: shown,
        omitted_lines: lines.len().saturating_sub(max_lines),
    }
}

fn inline_excerpt(matched: &str, max_chars: usize) -> Excerpt {
    let flat = matched.replace('\n', " ").replace("  ", " ");
    let line = if flat.chars().count() > max_chars {
        let cut: String = flat.chars().take(max_chars).collect();
        format!("{cut}...")
    } else {
        flat
    };
    Excerpt {
        lines: vec![line],
        omitted_lines: 0,
    }
}

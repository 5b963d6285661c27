//! Placeholder scanning.
//!
//! A placeholder is `{{ name }}` with optional inner whitespace, where the
//! name is an identifier (`[A-Za-z_][A-Za-z0-9_]*`).

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

/// Compiled placeholder pattern, capture group 1 is the variable name.
pub(crate) fn pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("placeholder pattern is valid")
    })
}

/// Unique placeholder names in order of first appearance.
pub fn names(body: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    pattern()
        .captures_iter(body)
        .filter_map(|caps| {
            let name = caps[1].to_string();
            seen.insert(name.clone()).then_some(name)
        })
        .collect()
}

/// Location of a `{{` that does not open a well-formed placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Malformed {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column, in characters.
    pub column: usize,
}

impl std::fmt::Display for Malformed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "unterminated or invalid placeholder at line {}, column {}",
            self.line, self.column
        )
    }
}

/// Find the first malformed placeholder opening, if any.
pub fn find_malformed(body: &str) -> Option<Malformed> {
    let valid: Vec<(usize, usize)> = pattern()
        .find_iter(body)
        .map(|m| (m.start(), m.end()))
        .collect();

    body.match_indices("{{")
        .map(|(offset, _)| offset)
        .find(|offset| !valid.iter().any(|(start, end)| offset >= start && offset < end))
        .map(|offset| locate(body, offset))
}

fn locate(body: &str, offset: usize) -> Malformed {
    let before = &body[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
    let column = body[line_start..offset].chars().count() + 1;
    Malformed { line, column }
}

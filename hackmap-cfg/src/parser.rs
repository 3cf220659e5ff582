//! Parser for `Item Colours` entries in a d2hackmap config file.
//!
//! Entries look like:
//! ```text
//! Item Colours[2001-2050][1][0,1]: 8, -1 // rings
//! ```
//! The outer split separates the `//` comment, then the key from the value
//! list at `:`. The key carries one or more bracketed index groups, each a
//! range list (see [`crate::ranges`]).

/// The only key family this parser recognizes.
pub const ITEM_COLOURS_KEY: &str = "Item Colours";

/// One parsed `Item Colours` line. Borrows from the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigRecord<'a> {
    /// Key name before the first `[`, trimmed.
    pub key: &'a str,
    /// Raw index group contents in source order, brackets removed.
    pub groups: Vec<&'a str>,
    /// Comma-separated values after the `:`, untrimmed.
    pub values: Vec<&'a str>,
    /// Trimmed text after `//`, if the line has one.
    pub comment: Option<&'a str>,
}

/// Parse one config line.
///
/// Returns `None` for anything that is not an `Item Colours` entry with at
/// least one index group: blank lines, section headers, other keys, lines
/// without a single `:`.
pub fn parse_line(line: &str) -> Option<ConfigRecord<'_>> {
    let (body, comment) = match line.split_once("//") {
        Some((body, comment)) => (body, Some(comment.trim())),
        None => (line, None),
    };

    let mut parts = body.trim().split(':');
    let (Some(left), Some(right), None) = (parts.next(), parts.next(), parts.next()) else {
        return None;
    };

    let mut segments = left.trim().split('[');
    let key = segments.next()?.trim();
    if key != ITEM_COLOURS_KEY {
        return None;
    }

    let groups: Vec<&str> = segments
        .map(|s| s.trim().trim_end_matches(']').trim())
        .collect();
    if groups.is_empty() {
        return None;
    }

    Some(ConfigRecord {
        key,
        groups,
        values: right.trim().split(',').collect(),
        comment,
    })
}

#[cfg(test)]
#[path = "tests/parser_tests.rs"]
mod tests;

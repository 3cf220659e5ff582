//! Range-list notation used inside index groups.
//!
//! A range list is a comma-separated sequence of tokens, each a single
//! integer (`"12"`) or an inclusive span (`"5-8"`). Token order and count are
//! preserved through remapping; spans are never merged or re-sorted.

use std::fmt;
use std::ops::RangeInclusive;

use crate::catalog::ItemCatalog;
use crate::error::{ConvertError, parse_number};
use crate::remap::UNBOUNDED;

/// One token of a range list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeToken {
    Single(i64),
    Span(i64, i64),
}

impl RangeToken {
    /// Parse `"a"` or `"a-b"`.
    pub fn parse(text: &str) -> Result<Self, ConvertError> {
        match text.split_once('-') {
            Some((low, high)) => Ok(Self::Span(parse_number(low)?, parse_number(high)?)),
            None => Ok(Self::Single(parse_number(text)?)),
        }
    }

    pub fn low(&self) -> i64 {
        match *self {
            Self::Single(v) | Self::Span(v, _) => v,
        }
    }

    pub fn high(&self) -> i64 {
        match *self {
            Self::Single(v) | Self::Span(_, v) => v,
        }
    }

    /// Apply `f` to each endpoint independently.
    pub fn map(self, f: impl Fn(i64) -> i64) -> Self {
        match self {
            Self::Single(v) => Self::Single(f(v)),
            Self::Span(low, high) => Self::Span(f(low), f(high)),
        }
    }

    /// Every value covered by the token. Empty if `high < low`.
    pub fn values(&self) -> RangeInclusive<i64> {
        self.low()..=self.high()
    }
}

impl fmt::Display for RangeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(v) => write!(f, "{v}"),
            Self::Span(low, high) => write!(f, "{low}-{high}"),
        }
    }
}

/// Parse a comma-separated range list.
pub fn parse_tokens(text: &str) -> Result<Vec<RangeToken>, ConvertError> {
    text.split(',').map(RangeToken::parse).collect()
}

/// Join tokens back into range-list notation.
pub fn join_tokens(tokens: &[RangeToken]) -> String {
    tokens
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Result of remapping one index group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemappedGroup {
    /// Catalog names for every id the group covers, in token order.
    pub names: Vec<String>,
    /// Remapped tokens in source order.
    pub tokens: Vec<RangeToken>,
    /// Remapped range list. Empty for the unbounded sentinel.
    pub ranges: String,
}

impl RemappedGroup {
    /// Names joined with `", "`.
    pub fn display_names(&self) -> String {
        self.names.join(", ")
    }
}

/// Remap every endpoint of a range list through `remap`.
///
/// When `catalog` is given, each remapped token is expanded and every id in
/// it must have a name; a missing one is an error. The unbounded sentinel
/// short-circuits to an empty result without consulting either.
pub fn remap_group(
    text: &str,
    remap: impl Fn(i64) -> i64,
    catalog: Option<&ItemCatalog>,
) -> Result<RemappedGroup, ConvertError> {
    if text.trim() == UNBOUNDED {
        return Ok(RemappedGroup::default());
    }

    let mut names = Vec::new();
    let mut remapped = Vec::new();

    for token in parse_tokens(text)? {
        let token = token.map(&remap);
        if let Some(catalog) = catalog {
            for id in token.values() {
                names.push(catalog.name(id)?.to_string());
            }
        }
        remapped.push(token);
    }

    Ok(RemappedGroup {
        names,
        ranges: join_tokens(&remapped),
        tokens: remapped,
    })
}

/// Collapse a set of integers into compact range-list notation.
///
/// Input order does not matter and duplicates are ignored; consecutive runs
/// become spans: `[5, 1, 2, 3]` gives `"1-3,5"`.
pub fn collapse_ids(ids: impl IntoIterator<Item = i64>) -> String {
    let mut sorted: Vec<i64> = ids.into_iter().collect();
    sorted.sort_unstable();
    sorted.dedup();

    let mut tokens = Vec::new();
    let mut iter = sorted.into_iter();
    let Some(first) = iter.next() else {
        return String::new();
    };

    let (mut low, mut high) = (first, first);
    for id in iter {
        if id == high + 1 {
            high = id;
        } else {
            tokens.push(run_token(low, high));
            low = id;
            high = id;
        }
    }
    tokens.push(run_token(low, high));

    join_tokens(&tokens)
}

fn run_token(low: i64, high: i64) -> RangeToken {
    if low == high {
        RangeToken::Single(low)
    } else {
        RangeToken::Span(low, high)
    }
}

/// Lazily iterate the integers a range list covers, in token order.
///
/// The unbounded sentinel and the empty string cover nothing. Only the
/// tokens are held in memory, so wide spans are cheap to walk.
pub fn iter_ranges(text: &str) -> Result<impl Iterator<Item = i64>, ConvertError> {
    let text = text.trim();
    let tokens = if text.is_empty() || text == UNBOUNDED {
        Vec::new()
    } else {
        parse_tokens(text)?
    };
    Ok(tokens.into_iter().flat_map(|t| t.values()))
}

/// Expand a range list into the integers it covers, in token order.
pub fn expand_ranges(text: &str) -> Result<Vec<i64>, ConvertError> {
    Ok(iter_ranges(text)?.collect())
}

#[cfg(test)]
#[path = "tests/ranges_tests.rs"]
mod tests;

//! Conversion of `Item Colours` entries into the destination rule format.
//!
//! Each entry becomes up to two `;` comment lines followed by one data line:
//! ```text
//! ; rings
//! ; Ring, Amulet
//! 508-509+0 = 3
//! ```
//! The data line is `<item ranges>[+<g1>][*<g3>][#<g2>] = <flag>`, where `gN`
//! is the Nth auxiliary index group with one-based indices made zero-based.

use std::collections::BTreeSet;
use std::fmt;
use std::io::{BufRead, Write};

use crate::catalog::ItemCatalog;
use crate::error::{ConvertError, parse_number};
use crate::parser::{ConfigRecord, parse_line};
use crate::ranges::{RangeToken, RemappedGroup, collapse_ids, parse_tokens, remap_group};
use crate::remap::{UNBOUNDED, plain_offset, remap_item_id};

/// Flag value emitted when the entry draws a map marker.
pub const FLAG_SHOWN: u8 = 3;
/// Flag value emitted otherwise.
pub const FLAG_HIDDEN: u8 = 0;

/// Second value that disables the marker.
const MARKER_DISABLED: &str = "-1";

/// `#` group treated as the default (`0,1`). Dropped whether it appears
/// before or after the offset is applied.
const DEFAULT_HASH_GROUP: [RangeToken; 2] = [RangeToken::Single(0), RangeToken::Single(1)];

/// Position of the `#` group among the index groups.
const HASH_GROUP: usize = 2;

/// Number of index groups the destination format has a slot for.
const MAX_GROUPS: usize = 4;

/// A converted data line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRecord {
    pub primary: String,
    pub plus: Option<String>,
    pub star: Option<String>,
    pub hash: Option<String>,
    pub flag: u8,
}

impl fmt::Display for OutputRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.primary)?;
        if let Some(plus) = &self.plus {
            write!(f, "+{plus}")?;
        }
        if let Some(star) = &self.star {
            write!(f, "*{star}")?;
        }
        if let Some(hash) = &self.hash {
            write!(f, "#{hash}")?;
        }
        write!(f, " = {}", self.flag)
    }
}

/// Everything emitted for one source entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedEntry {
    /// Source `//` comment, if non-empty.
    pub comment: Option<String>,
    /// Item names covered by the primary group, in order.
    pub names: Vec<String>,
    /// Destination item ids covered by the primary group.
    pub item_ids: Vec<i64>,
    pub record: OutputRecord,
}

impl ConvertedEntry {
    /// Output lines in emission order.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(3);
        if let Some(comment) = &self.comment {
            lines.push(format!("; {comment}"));
        }
        if !self.names.is_empty() {
            lines.push(format!("; {}", self.names.join(", ")));
        }
        lines.push(self.record.to_string());
        lines
    }
}

/// Derive the output flag from the entry's value list.
///
/// Every value must be an integer. The flag is shown only when a second
/// value exists and is not `-1`.
pub fn derive_flag(values: &[&str]) -> Result<u8, ConvertError> {
    for value in values {
        parse_number(value)?;
    }
    match values.get(1) {
        Some(marker) if marker.trim() != MARKER_DISABLED => Ok(FLAG_SHOWN),
        _ => Ok(FLAG_HIDDEN),
    }
}

/// Convert one parsed entry.
pub fn convert_record(
    record: &ConfigRecord<'_>,
    catalog: &ItemCatalog,
) -> Result<ConvertedEntry, ConvertError> {
    let flag = derive_flag(&record.values)?;

    let first = record.groups.first().copied().unwrap_or_default();
    let primary = remap_group(first, remap_item_id, Some(catalog))?;

    if record.groups.len() > MAX_GROUPS {
        log::warn!(
            "Ignoring {} extra index group(s) after [{}]",
            record.groups.len() - MAX_GROUPS,
            record.groups[MAX_GROUPS - 1],
        );
    }

    let mut aux: [Option<String>; MAX_GROUPS] = Default::default();
    for (index, group) in record.groups.iter().enumerate().take(MAX_GROUPS).skip(1) {
        let remapped = remap_group(group, plain_offset, None)?;
        if index == HASH_GROUP && is_default_hash(group, &remapped)? {
            continue;
        }
        aux[index] = Some(remapped.ranges);
    }
    let [_, plus, hash, star] = aux;

    Ok(ConvertedEntry {
        comment: record
            .comment
            .filter(|c| !c.is_empty())
            .map(str::to_string),
        names: primary.names,
        item_ids: primary.tokens.iter().flat_map(|t| t.values()).collect(),
        record: OutputRecord {
            primary: primary.ranges,
            plus,
            star,
            hash,
            flag,
        },
    })
}

fn is_default_hash(source: &str, remapped: &RemappedGroup) -> Result<bool, ConvertError> {
    if remapped.tokens == DEFAULT_HASH_GROUP {
        return Ok(true);
    }
    if source.trim() == UNBOUNDED {
        return Ok(false);
    }
    Ok(parse_tokens(source)? == DEFAULT_HASH_GROUP)
}

/// Running totals for a conversion.
#[derive(Debug, Clone, Default)]
pub struct ConversionStats {
    pub lines_read: usize,
    pub entries: usize,
    pub skipped: usize,
    /// Destination item ids matched by any converted entry.
    pub item_ids: BTreeSet<i64>,
}

impl ConversionStats {
    /// Covered destination ids in range-list notation.
    pub fn covered_ranges(&self) -> String {
        collapse_ids(self.item_ids.iter().copied())
    }
}

/// Streams config lines through [`convert_record`], keeping statistics.
pub struct Converter<'c> {
    catalog: &'c ItemCatalog,
    stats: ConversionStats,
}

impl<'c> Converter<'c> {
    pub fn new(catalog: &'c ItemCatalog) -> Self {
        Self {
            catalog,
            stats: ConversionStats::default(),
        }
    }

    pub fn stats(&self) -> &ConversionStats {
        &self.stats
    }

    /// Convert a single source line. `None` means the line was skipped.
    ///
    /// Errors are tagged with the line's position in the stream.
    pub fn convert_line(&mut self, line: &str) -> Result<Option<ConvertedEntry>, ConvertError> {
        self.stats.lines_read += 1;
        let line_no = self.stats.lines_read;

        let Some(record) = parse_line(line) else {
            log::debug!("line {line_no}: skipped");
            self.stats.skipped += 1;
            return Ok(None);
        };

        let entry = convert_record(&record, self.catalog).map_err(|e| e.at_line(line_no))?;
        self.stats.item_ids.extend(entry.item_ids.iter().copied());
        self.stats.entries += 1;
        log::debug!("line {line_no}: {}", entry.record);
        Ok(Some(entry))
    }

    /// Convert every line of `input`, returning the output lines in order.
    pub fn convert_str(&mut self, input: &str) -> Result<Vec<String>, ConvertError> {
        let mut out = Vec::new();
        for line in input.lines() {
            if let Some(entry) = self.convert_line(line)? {
                out.extend(entry.lines());
            }
        }
        Ok(out)
    }

    /// Read lines from `reader` and write converted output to `writer`.
    pub fn convert_to<R: BufRead, W: Write>(
        &mut self,
        reader: R,
        mut writer: W,
    ) -> Result<(), ConvertError> {
        for line in reader.lines() {
            let line = line?;
            if let Some(entry) = self.convert_line(&line)? {
                for out in entry.lines() {
                    writeln!(writer, "{out}")?;
                }
            }
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/convert_tests.rs"]
mod tests;

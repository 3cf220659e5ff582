//! Item database (`ItemDesc.csv`) loader.
//!
//! The database is a headerless CSV file. Columns used:
//! ```text
//! 0: numeric item id (raw, pre-remap)
//! 1: (unused)
//! 2: display name
//! ```
//! Rows whose first field does not start with a decimal digit are comment or
//! header rows and are skipped.

use std::collections::HashMap;
use std::path::Path;

use crate::error::ConvertError;

/// Lookup table from item id to display name.
///
/// Built once, then only read. Duplicate ids keep the last row seen.
#[derive(Debug, Clone, Default)]
pub struct ItemCatalog {
    names: HashMap<i64, String>,
}

impl ItemCatalog {
    /// Build a catalog from already-split rows.
    ///
    /// Each row is a sequence of fields; see the module docs for the layout.
    pub fn from_rows<I, R, S>(rows: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut names = HashMap::new();
        for row in rows {
            let fields = row.as_ref();
            if let Some((id, name)) = parse_row(|i| fields.get(i).map(|f| f.as_ref())) {
                names.insert(id, name.to_string());
            }
        }
        Self { names }
    }

    /// Look up the display name for an item id.
    pub fn get(&self, id: i64) -> Option<&str> {
        self.names.get(&id).map(|s| s.as_str())
    }

    /// Look up the display name for an item id, failing if it is missing.
    pub fn name(&self, id: i64) -> Result<&str, ConvertError> {
        self.get(id).ok_or_else(|| ConvertError::key_lookup(id))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(i64, S)> for ItemCatalog {
    fn from_iter<T: IntoIterator<Item = (i64, S)>>(iter: T) -> Self {
        Self {
            names: iter.into_iter().map(|(id, n)| (id, n.into())).collect(),
        }
    }
}

/// Extract `(id, name)` from one row, or `None` if the row does not qualify.
fn parse_row<'a>(get: impl Fn(usize) -> Option<&'a str>) -> Option<(i64, &'a str)> {
    let id_field = get(0)?;
    if !id_field.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    let id = match id_field.trim().parse::<i64>() {
        Ok(id) => id,
        Err(_) => {
            log::warn!("Skipping item row with malformed id {id_field:?}");
            return None;
        }
    };

    match get(2) {
        Some(name) => Some((id, name)),
        None => {
            log::warn!("Skipping item row {id}: no name column");
            None
        }
    }
}

/// Parse item database CSV content from a string.
///
/// Rows the CSV reader rejects are logged and skipped, so this never fails.
pub fn parse_catalog_csv(content: &str) -> ItemCatalog {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut names = HashMap::new();

    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed item CSV row: {e}");
                continue;
            }
        };

        if let Some((id, name)) = parse_row(|i| record.get(i)) {
            names.insert(id, name.to_string());
        }
    }

    log::debug!("Loaded {} item names", names.len());
    ItemCatalog { names }
}

/// Parse the item database from a file path.
pub fn parse_catalog_file(path: &Path) -> Result<ItemCatalog, ConvertError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(parse_catalog_csv(&contents))
}

#[cfg(test)]
#[path = "tests/catalog_tests.rs"]
mod tests;

pub(crate) mod convert;
pub(crate) mod lookup;

use std::path::Path;

use hackmap_cfg::{ConvertError, ItemCatalog, parse_catalog_file};

use crate::error::CliError;

/// Load the item database, naming the file on failure.
pub(crate) fn load_catalog(path: &Path) -> Result<ItemCatalog, CliError> {
    let catalog = parse_catalog_file(path).map_err(|e| match e {
        ConvertError::Io(source) => CliError::file(path, source),
        other => CliError::Convert(other),
    })?;
    log::info!("Loaded {} item names from {}", catalog.len(), path.display());
    if catalog.is_empty() {
        log::warn!("Item database has no rows with a numeric id");
    }
    Ok(catalog)
}

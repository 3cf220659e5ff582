use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use hackmap_cfg::Converter;

use crate::commands::load_catalog;
use crate::error::CliError;

pub(crate) fn run_convert(
    items: &Path,
    input: &Path,
    output: Option<&Path>,
) -> Result<(), CliError> {
    let catalog = load_catalog(items)?;

    let reader = BufReader::new(File::open(input).map_err(|e| CliError::file(input, e))?);
    let writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).map_err(|e| CliError::file(path, e))?,
        )),
        None => Box::new(std::io::stdout().lock()),
    };

    let mut converter = Converter::new(&catalog);
    converter.convert_to(reader, writer)?;

    let stats = converter.stats();
    log::info!(
        "Converted {} entries from {} lines ({} skipped)",
        stats.entries,
        stats.lines_read,
        stats.skipped,
    );
    if !stats.item_ids.is_empty() {
        log::debug!("Destination item ids covered: {}", stats.covered_ranges());
    }
    if let Some(path) = output {
        log::info!("Wrote {}", path.display());
    }
    Ok(())
}

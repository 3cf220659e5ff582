use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use hackmap_cfg::{iter_ranges, remap_group, remap_item_id};

use crate::commands::load_catalog;
use crate::error::CliError;

pub(crate) fn run_lookup(items: &Path, ranges: &str) -> Result<(), CliError> {
    let catalog = load_catalog(items)?;
    let remapped = remap_group(ranges, remap_item_id, None)?;

    for raw in iter_ranges(ranges)? {
        let id = remap_item_id(raw);
        match catalog.get(id) {
            Some(name) => println!("{raw:>5} -> {id:<5} {name}"),
            None => println!(
                "{raw:>5} -> {id:<5} {}",
                "(not in item database)".if_supports_color(Stdout, |t| t.yellow()),
            ),
        }
    }
    println!(
        "{} {}",
        "Destination ranges:".if_supports_color(Stdout, |t| t.bold()),
        remapped.ranges,
    );
    Ok(())
}

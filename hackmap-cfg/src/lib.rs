//! Conversion of d2hackmap `Item Colours` config entries into range-based
//! item filter rules, with item names resolved from the item database.

pub mod catalog;
pub mod convert;
pub mod error;
pub mod parser;
pub mod ranges;
pub mod remap;

pub use catalog::{ItemCatalog, parse_catalog_csv, parse_catalog_file};
pub use convert::{
    ConversionStats, ConvertedEntry, Converter, OutputRecord, convert_record, derive_flag,
};
pub use error::ConvertError;
pub use parser::{ConfigRecord, parse_line};
pub use ranges::{
    RangeToken, RemappedGroup, collapse_ids, expand_ranges, iter_ranges, parse_tokens, remap_group,
};
pub use remap::{UNBOUNDED, plain_offset, remap_item_id};

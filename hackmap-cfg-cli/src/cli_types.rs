//! CLI type definitions: command enum and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hackmap-cfg")]
#[command(about = "Convert d2hackmap Item Colours entries into item filter rules", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Location of the item database.
#[derive(Args, Clone)]
pub(crate) struct ItemArgs {
    /// Item database CSV (id, code, name)
    #[arg(short, long, default_value = "ItemDesc.csv")]
    pub items: PathBuf,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Convert the Item Colours section of a d2hackmap config
    Convert {
        #[command(flatten)]
        items: ItemArgs,

        /// Write rules to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// d2hackmap config file (UTF-8)
        #[arg(default_value = "d2hackmap.cfg")]
        input: PathBuf,
    },

    /// Show how raw item ids map to destination ids and names
    Lookup {
        #[command(flatten)]
        items: ItemArgs,

        /// Raw item range list (e.g., 2001-2005,12)
        ranges: String,
    },
}

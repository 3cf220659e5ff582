//! hackmap-cfg CLI
//!
//! Converts the `Item Colours` section of a d2hackmap config into item filter
//! rules, resolving item names from the item database.

mod cli_types;
mod commands;
mod error;

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use cli_types::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Commands::Convert {
            items,
            output,
            input,
        } => commands::convert::run_convert(&items.items, &input, output.as_deref()),
        Commands::Lookup { items, ranges } => commands::lookup::run_lookup(&items.items, &ranges),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!(
                "{} {e}",
                "error:".if_supports_color(Stderr, |t| t.red()),
            );
            ExitCode::FAILURE
        }
    }
}

/// Install the stderr logger. `RUST_LOG` applies unless a flag overrides it.
fn init_logging(verbose: bool, quiet: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if quiet {
        builder.filter_level(LevelFilter::Warn);
    } else if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    if !verbose {
        builder.format_timestamp(None).format_target(false);
    }
    builder.init();
}

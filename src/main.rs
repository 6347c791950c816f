//! list2invoice - convert a time-tracking outline into invoice lines
//!
//! list2invoice:
//! - Loads an OPML export of a month / date / task outline
//! - Flattens it into one `date<TAB>task<TAB>hours` line per task
//! - Keeps lines it cannot parse, with hours set to `!!!`

use anyhow::Result;
use clap::Parser;
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};

mod cli;
mod convert;
mod core;
mod outline;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let config = ConfigBuilder::new()
        .set_time_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .build();
    // Only fails when a logger is already installed.
    let _ = TermLogger::init(
        cli.log_level(),
        config,
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    cli::run(cli)
}

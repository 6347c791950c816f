//! CLI module - Command-line interface definitions and handlers

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use crate::convert::{run_convert, Destination};
use crate::core::paths::normalize_path;

/// list2invoice - turn a time-tracking outline into invoice lines.
#[derive(Parser, Debug)]
#[command(name = "list2invoice")]
#[command(
    author,
    version,
    about,
    long_about = r#"Convert an OPML export of a month / date / task outline into
tab-separated invoice lines.

The outline is expected to look like:

    July 2020
        1-Jul-2020
            Task one name (3)
            Follow-up phone call (.25)
        2-Jul-2020
            Call with Tom to debrief and plan (.5)

and produces one line per task:

    1-Jul-2020<TAB>Task one name<TAB>3

Task lines without a trailing (hours) group are kept with hours set to !!!
so they can be fixed by hand.

Examples:
    list2invoice july.opml              # writes july.txt next to it
    list2invoice july.opml -o inv.txt
    list2invoice july.opml --stdout | pbcopy
"#
)]
pub struct Cli {
    /// OPML file to convert.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write to this file instead of INPUT with a .txt extension.
    #[arg(
        short,
        long,
        env = "LIST2INVOICE_OUTPUT",
        value_name = "PATH",
        long_help = "Write the invoice lines to PATH instead of the default, which is INPUT\n\
with its extension replaced by .txt. An existing file is overwritten.\n\n\
Ignored when --stdout is given."
    )]
    pub output: Option<PathBuf>,

    /// Print the invoice lines to stdout instead of writing a file (wins over --output).
    #[arg(long)]
    pub stdout: bool,

    /// Quiet mode (no diagnostics, not even lines that need attention).
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Verbose mode (more diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Log level selected by -q/-v
    pub fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Off
        } else if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }

    fn destination(&self) -> Destination {
        if self.stdout {
            Destination::Stdout
        } else if let Some(path) = &self.output {
            Destination::File(path.clone())
        } else {
            Destination::Derived
        }
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let conversion = run_convert(&cli.input, cli.destination())?;
    log::debug!(
        "{} records, {} need attention, written to {}",
        conversion.records,
        conversion.needs_attention,
        conversion
            .output
            .as_deref()
            .map(normalize_path)
            .unwrap_or_else(|| "stdout".to_string())
    );
    Ok(())
}

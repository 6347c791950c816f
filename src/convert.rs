//! Convert command - OPML file in, invoice lines out

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::core::error::ConvertError;
use crate::core::model::OutputRecord;
use crate::core::paths::{is_same_file, normalize_path, output_path_for};
use crate::core::render::{render_records, render_to};
use crate::outline::flatten::flatten_forest;
use crate::outline::opml::load_opml;

/// Where the rendered records go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Next to the input, extension replaced with `txt`
    Derived,
    /// An explicit file path
    File(PathBuf),
    Stdout,
}

/// Summary of one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// Records written
    pub records: usize,
    /// Records whose hours need hand editing (sentinel or empty)
    pub needs_attention: usize,
    /// Output file, `None` when written to stdout
    pub output: Option<PathBuf>,
}

/// Load and flatten an OPML file
pub fn convert_file(input: &Path) -> Result<Vec<OutputRecord>, ConvertError> {
    let forest = load_opml(input)?;
    log::debug!(
        "loaded {} top-level outlines ({} nodes) from {}",
        forest.len(),
        forest.iter().map(|n| n.container_count()).sum::<usize>(),
        normalize_path(input)
    );
    Ok(flatten_forest(&forest))
}

/// Write rendered records to `output`, replacing any existing file
pub fn write_records(records: &[OutputRecord], output: &Path) -> Result<(), ConvertError> {
    fs::write(output, render_records(records)).map_err(|source| ConvertError::Write {
        path: output.to_path_buf(),
        source,
    })
}

/// Run the convert command
pub fn run_convert(input: &Path, destination: Destination) -> Result<Conversion> {
    let output = match destination {
        Destination::Derived => Some(output_path_for(input)),
        Destination::File(path) => Some(path),
        Destination::Stdout => None,
    };

    if let Some(output) = &output {
        if is_same_file(input, output) {
            return Err(ConvertError::SameAsInput {
                path: output.clone(),
            }
            .into());
        }
    }

    let records = convert_file(input)?;
    let needs_attention = report_attention(&records);

    match &output {
        Some(path) => {
            write_records(&records, path)?;
            log::info!(
                "wrote {} records to {}",
                records.len(),
                normalize_path(path)
            );
        }
        None => render_to(&records, io::stdout().lock()).context("Failed to write to stdout")?,
    }

    Ok(Conversion {
        records: records.len(),
        needs_attention,
        output,
    })
}

/// Log every record whose hours need hand editing and return how many do
fn report_attention(records: &[OutputRecord]) -> usize {
    let flagged: Vec<_> = records.iter().filter(|r| r.needs_attention()).collect();
    for record in &flagged {
        log::warn!(
            "missing hours on {:?} under date {:?}",
            record.task,
            record.date
        );
    }
    if !flagged.is_empty() {
        log::warn!(
            "{} of {} lines need hand editing (hours are {} or empty)",
            flagged.len(),
            records.len(),
            crate::core::model::SENTINEL
        );
    }
    flagged.len()
}

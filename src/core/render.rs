//! Renderer module
//!
//! Renders output records as tab-separated invoice lines.
//!
//! Tabs and line breaks inside a field (e.g. a `&#10;` in an outline label)
//! are written as spaces so every record stays on one line with three fields.

use crate::core::model::OutputRecord;
use std::io::Write;

/// Render one record as `date<TAB>task<TAB>hours` (no line terminator)
pub fn render_record(record: &OutputRecord) -> String {
    format!(
        "{}\t{}\t{}",
        flatten_field(&record.date),
        flatten_field(&record.task),
        flatten_field(&record.hours)
    )
}

fn flatten_field(field: &str) -> String {
    field.replace(['\t', '\r', '\n'], " ")
}

/// Render all records, each terminated by a newline
pub fn render_records(records: &[OutputRecord]) -> String {
    let mut out = String::new();
    for record in records {
        out.push_str(&render_record(record));
        out.push('\n');
    }
    out
}

/// Render to a writer
pub fn render_to<W: Write>(records: &[OutputRecord], mut writer: W) -> std::io::Result<()> {
    writer.write_all(render_records(records).as_bytes())?;
    writer.flush()
}

//! Task line parsing
//!
//! Splits a task line of the form `Call with Tom (1.5)` into a task
//! description and an hours value:
//! `<task>(<hours>)` anchored at the end of the line.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::model::{OutputRecord, SENTINEL};

/// Static regex for a trailing parenthesized hours group.
/// The greedy task group makes the last `(...)` on the line win.
pub static TASK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*)\((.+)\)\s*$").expect("Invalid TASK_RE regex"));

/// Parse one task line under the given date.
///
/// Lines without a trailing `(hours)` group are kept whole, with
/// [`SENTINEL`] as their hours, so nothing is lost.
pub fn parse_line(text: &str, date: &str) -> OutputRecord {
    match TASK_RE.captures(text) {
        Some(caps) => {
            let task = caps.get(1).map(|m| m.as_str()).unwrap_or("");
            let hours = caps.get(2).map(|m| m.as_str()).unwrap_or("");
            OutputRecord::new(date, task.trim(), hours.trim())
        }
        None => OutputRecord::new(date, text.trim(), SENTINEL),
    }
}

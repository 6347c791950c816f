//! Tree flattening
//!
//! Walks a month / date / task outline and emits one record per task line,
//! in document order. Depth 1 is the month, depth 2 sets the date, and
//! every container at depth 3 or below is a task line.
//!
//! Containers nested below a task line are emitted as further task lines
//! under the same date, before the walk moves on to the next sibling.

use crate::core::model::{OutlineNode, OutputRecord};
use crate::outline::parse::parse_line;

/// Depth of the top-level (month) outlines
pub const MONTH_DEPTH: usize = 1;

/// Depth whose label becomes the date of every record below it
pub const DATE_DEPTH: usize = 2;

/// Flatten one node at `depth`, with `date` inherited from its ancestors
pub fn flatten(node: &OutlineNode, depth: usize, date: &str) -> Vec<OutputRecord> {
    let mut records = Vec::new();
    flatten_into(node, depth, date, &mut records);
    records
}

/// Flatten a sequence of top-level outlines, starting with an empty date
pub fn flatten_forest(nodes: &[OutlineNode]) -> Vec<OutputRecord> {
    nodes
        .iter()
        .flat_map(|node| flatten(node, MONTH_DEPTH, ""))
        .collect()
}

fn flatten_into(node: &OutlineNode, depth: usize, date: &str, out: &mut Vec<OutputRecord>) {
    let OutlineNode::Container { children, .. } = node else {
        return;
    };
    let label = node.label();

    let date = match depth {
        d if d < DATE_DEPTH => date,
        DATE_DEPTH => label,
        _ => {
            out.push(parse_line(label, date));
            date
        }
    };

    for child in children {
        flatten_into(child, depth + 1, date, out);
    }
}

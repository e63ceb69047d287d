//! DOT statement and envelope formatting
//!
//! Both graph pipelines emit through these helpers. Node labels are the
//! 7-character id prefix; duplicate node statements are legal DOT and
//! are deliberately not deduplicated here.

use crate::artifacts::objects::object_id::ObjectId;

/// Name of the emitted graph
pub const GRAPH_NAME: &str = "git";

/// One level of statement indentation
pub const INDENT: &str = "    ";

pub fn node_statement(indent: &str, oid: &ObjectId) -> String {
    format!(
        "{indent}\"{}\" [label=\"{}\"];\n",
        oid.as_ref(),
        oid.to_short_oid()
    )
}

pub fn edge_statement(indent: &str, from: &ObjectId, to: &ObjectId, label: &str) -> String {
    format!(
        "{indent}\"{}\" -- \"{}\" [label=\"{label}\"];\n",
        from.as_ref(),
        to.as_ref()
    )
}

/// Wrap accumulated statements in the graph envelope.
pub fn document(body: &str) -> String {
    format!("graph {GRAPH_NAME} {{\n{body}}}\n")
}

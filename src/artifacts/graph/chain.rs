use crate::artifacts::graph::dot::{INDENT, edge_statement, node_statement};
use crate::artifacts::objects::object_id::ObjectId;
use derive_new::new;

/// Linear commit-chain graph builder.
///
/// Emits one node per commit id in the given order, then one unlabeled
/// edge per consecutive pair. The id order is preserved as provided by
/// the history source, not re-sorted.
#[derive(Clone, new)]
pub struct HistoryChain<'h> {
    commit_oids: &'h [ObjectId],
}

impl HistoryChain<'_> {
    pub fn render(&self) -> String {
        let mut fragment = String::new();

        for oid in self.commit_oids {
            fragment.push_str(&node_statement(INDENT, oid));
        }

        for pair in self.commit_oids.windows(2) {
            fragment.push_str(&edge_statement(INDENT, &pair[0], &pair[1], ""));
        }

        fragment
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::graph::dot::{INDENT, edge_statement, node_statement};
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use crate::artifacts::objects::tree::Tree;
use colored::Colorize;
use derive_new::new;
use std::io::Write;

/// Recursive commit/tree graph builder.
///
/// Walks from a commit through its tree and nested subtrees, emitting
/// one node statement per visited object and one labeled edge per tree
/// entry. Subtree roots are decoded with the same header shape as
/// commits, so the walk is uniform at every depth.
///
/// Ids reachable through more than one path produce duplicate node
/// statements, and a reference cycle in a corrupt store recurses
/// without bound; consumers of the DOT output tolerate duplicates.
#[derive(new)]
pub struct GraphBuilder<'r> {
    repository: &'r Repository,
}

impl GraphBuilder<'_> {
    pub fn build(&self, commit_oid: &ObjectId) -> anyhow::Result<String> {
        self.walk(commit_oid, 0)
    }

    fn walk(&self, oid: &ObjectId, depth: usize) -> anyhow::Result<String> {
        let indent = INDENT.repeat(depth);
        let mut fragment = node_statement(&indent, oid);

        // The starting commit must exist; a missing subtree further down
        // is reported and treated as having no children.
        let text = match self.repository.database().try_load_text(oid)? {
            Some(text) => text,
            None if depth == 0 => anyhow::bail!("Commit object not found: {}", oid.as_ref()),
            None => {
                self.skip_notice(oid)?;
                return Ok(fragment);
            }
        };

        let tree_oid = Commit::parse(&text)?.into_tree_oid();
        let entries = match self.repository.database().try_load_text(&tree_oid)? {
            Some(tree_text) => Tree::parse(&tree_text).into_entries(),
            None => {
                self.skip_notice(&tree_oid)?;
                Vec::new()
            }
        };

        for entry in entries {
            fragment.push_str(&edge_statement(&indent, oid, &entry.oid, &entry.name));
            if entry.is_tree() {
                fragment.push_str(&self.walk(&entry.oid, depth + 1)?);
            }
        }

        Ok(fragment)
    }

    fn skip_notice(&self, oid: &ObjectId) -> anyhow::Result<()> {
        writeln!(
            self.repository.writer(),
            "{}",
            format!("Skipping tree {}: no such file.", oid.as_ref()).yellow()
        )?;

        Ok(())
    }
}

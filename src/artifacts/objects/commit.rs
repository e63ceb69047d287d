//! Commit object decoder
//!
//! Only the tree reference is consumed: the first line of the decoded
//! text has the shape `tree <id>`, and the second space-separated token
//! is taken as the tree id. The keyword itself is not validated, so the
//! decoder also accepts the pseudo-commit shape subtree roots carry.
//! Parent, author and message lines are ignored.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Commit {
    tree_oid: ObjectId,
}

impl Commit {
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        let tree_oid = text
            .split('\n')
            .next()
            .and_then(|header| header.split(' ').nth(1))
            .context("Invalid commit object: missing tree id in header")?;
        let tree_oid = ObjectId::try_parse(tree_oid.to_string())?;

        Ok(Commit { tree_oid })
    }

    pub fn tree_oid(&self) -> &ObjectId {
        &self.tree_oid
    }

    pub fn into_tree_oid(self) -> ObjectId {
        self.tree_oid
    }
}

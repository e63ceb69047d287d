//! Tree object decoder
//!
//! A decoded tree is a listing of entries, one per line, with the shape
//! `<mode> <hash> <name>`: the referenced id is the MIDDLE field and
//! the display name the LAST field. This field order is load-bearing
//! for the store format and must not be reordered. Lines that do not
//! split into exactly three space-separated fields, and lines whose id
//! field does not validate, are dropped rather than failing the decode.

use crate::artifacts::objects::object_id::ObjectId;

/// Mode token marking an entry that is itself a tree
pub const TREE_MODE: &str = "tree";

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TreeEntry {
    pub mode: String,
    pub oid: ObjectId,
    pub name: String,
}

impl TreeEntry {
    /// Entries with the literal tree mode token are recursed into;
    /// every other mode is a leaf.
    pub fn is_tree(&self) -> bool {
        self.mode == TREE_MODE
    }
}

#[derive(Debug, Clone, Default)]
pub struct Tree {
    entries: Vec<TreeEntry>,
}

impl Tree {
    pub fn parse(text: &str) -> Self {
        let entries = text
            .split('\n')
            .filter(|line| !line.is_empty())
            .filter_map(|line| {
                let fields = line.split(' ').collect::<Vec<_>>();
                let [mode, oid, name] = fields.as_slice() else {
                    return None;
                };
                let oid = ObjectId::try_parse((*oid).to_string()).ok()?;

                Some(TreeEntry {
                    mode: (*mode).to_string(),
                    oid,
                    name: (*name).to_string(),
                })
            })
            .collect::<Vec<_>>();

        Tree { entries }
    }

    pub fn entries(&self) -> impl Iterator<Item = &TreeEntry> {
        self.entries.iter()
    }

    pub fn into_entries(self) -> Vec<TreeEntry> {
        self.entries
    }
}

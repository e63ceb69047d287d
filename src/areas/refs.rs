//! HEAD resolution
//!
//! The HEAD file contains either a 40-character object id (detached
//! head) or `ref: <path>` pointing at a branch ref file under the git
//! directory. Symbolic indirection is followed exactly one level; when
//! HEAD is missing or empty, the conventional default branch ref is
//! read directly instead.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::path::Path;

/// Regex pattern for parsing symbolic references
const SYMREF_REGEX: &str = r"^ref: (.+)$";

/// Name of the HEAD reference
pub const HEAD_REF_NAME: &str = "HEAD";

/// Ref file consulted when HEAD itself is unreadable
const DEFAULT_BRANCH_REF: &str = "refs/heads/master";

#[derive(Debug, new)]
pub struct Refs {
    /// Path to the refs root (typically `.git`)
    path: Box<Path>,
}

impl Refs {
    /// Resolve the current commit id.
    ///
    /// Fails with a `reference unresolved` error when neither HEAD nor
    /// the default branch ref yields content.
    pub fn resolve_head(&self) -> anyhow::Result<ObjectId> {
        if let Some(oid) = self.read_head()? {
            return Ok(oid);
        }

        self.read_default_branch()?.ok_or_else(|| {
            anyhow::anyhow!(
                "reference unresolved: neither {} nor {} is readable",
                HEAD_REF_NAME,
                DEFAULT_BRANCH_REF
            )
        })
    }

    fn read_head(&self) -> anyhow::Result<Option<ObjectId>> {
        let head_path = self.head_path();
        if !head_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&head_path)
            .with_context(|| format!("failed to read HEAD file at {:?}", head_path))?;
        let content = content.trim();

        if content.is_empty() {
            return Ok(None);
        }

        let symref_match = regex::Regex::new(SYMREF_REGEX)?.captures(content);
        match symref_match {
            // one level of indirection only
            Some(symref_match) => {
                let ref_path = self.path.join(&symref_match[1]);
                let content = std::fs::read_to_string(&ref_path)
                    .with_context(|| format!("failed to read ref file at {:?}", ref_path))?;

                Ok(Some(ObjectId::try_parse(content.trim().to_string())?))
            }
            None => Ok(Some(ObjectId::try_parse(content.to_string())?)),
        }
    }

    fn read_default_branch(&self) -> anyhow::Result<Option<ObjectId>> {
        let ref_path = self.path.join(DEFAULT_BRANCH_REF);
        if !ref_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&ref_path)
            .with_context(|| format!("failed to read ref file at {:?}", ref_path))?;

        Ok(Some(ObjectId::try_parse(content.trim().to_string())?))
    }

    pub fn head_path(&self) -> Box<Path> {
        self.path.join(HEAD_REF_NAME).into_boxed_path()
    }
}

//! Commit history listing
//!
//! The history chain pipeline does not walk the object store itself; it
//! consumes an ordered list of commit ids from the repository's own log
//! facility, treated as an opaque collaborator behind `HistorySource`.

use crate::artifacts::objects::object_id::ObjectId;
use anyhow::Context;
use derive_new::new;
use std::path::Path;
use std::process::Command;

/// Ordered commit ids for the current branch, most recent first.
pub trait HistorySource {
    fn commit_ids(&self) -> anyhow::Result<Vec<ObjectId>>;
}

/// History source backed by `git log`.
#[derive(Debug, new)]
pub struct GitLog {
    /// Repository root the subprocess runs in
    path: Box<Path>,
}

impl HistorySource for GitLog {
    fn commit_ids(&self) -> anyhow::Result<Vec<ObjectId>> {
        let output = Command::new("git")
            .arg("log")
            .arg("--pretty=format:%H")
            .current_dir(&self.path)
            .output()
            .context("failed to run git log")?;

        if !output.status.success() {
            anyhow::bail!(
                "git log failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        let stdout =
            String::from_utf8(output.stdout).context("git log output does not decode as text")?;

        stdout
            .split('\n')
            .filter(|line| !line.is_empty())
            .map(|line| ObjectId::try_parse(line.to_string()))
            .collect()
    }
}

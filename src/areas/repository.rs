use crate::areas::database::Database;
use crate::areas::history::{GitLog, HistorySource};
use crate::areas::refs::Refs;
use anyhow::Context;
use std::cell::{RefCell, RefMut};
use std::path::Path;

/// A repository opened for graph rendering.
///
/// Holds the canonicalized repository root and read-only views over its
/// git directory; all console output goes through the injected writer.
pub struct Repository {
    path: Box<Path>,
    writer: RefCell<Box<dyn std::io::Write>>,
    database: Database,
    refs: Refs,
    history: Box<dyn HistorySource>,
}

impl Repository {
    pub fn new(path: &str, writer: Box<dyn std::io::Write>) -> anyhow::Result<Self> {
        let root = Path::new(path)
            .canonicalize()
            .with_context(|| format!("repository path not found: {path}"))?;
        let history = Box::new(GitLog::new(root.into_boxed_path()));

        Self::with_history_source(path, writer, history)
    }

    pub fn with_history_source(
        path: &str,
        writer: Box<dyn std::io::Write>,
        history: Box<dyn HistorySource>,
    ) -> anyhow::Result<Self> {
        let path = Path::new(path)
            .canonicalize()
            .with_context(|| format!("repository path not found: {path}"))?;

        let database = Database::new(path.join(".git").join("objects").into_boxed_path());
        let refs = Refs::new(path.join(".git").into_boxed_path());

        Ok(Repository {
            path: path.into_boxed_path(),
            writer: RefCell::new(writer),
            database,
            refs,
            history,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn writer(&'_ self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn refs(&self) -> &Refs {
        &self.refs
    }

    pub fn history_source(&self) -> &dyn HistorySource {
        self.history.as_ref()
    }
}

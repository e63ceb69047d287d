use crate::areas::repository::Repository;
use crate::artifacts::graph::chain::HistoryChain;
use crate::artifacts::graph::dot;
use anyhow::Context;
use std::io::Write;

/// Output file for the linear commit-chain graph
pub const HISTORY_GRAPH_FILE: &str = "git_graph_all_commits.dot";

impl Repository {
    pub fn history_graph(&self) -> anyhow::Result<()> {
        let commit_oids = self.history_source().commit_ids()?;

        let fragment = HistoryChain::new(&commit_oids).render();
        let document = dot::document(&fragment);

        let output_path = self.path().join(HISTORY_GRAPH_FILE);
        std::fs::write(&output_path, document).context(format!(
            "Unable to write graph file {}",
            output_path.display()
        ))?;

        writeln!(
            self.writer(),
            "DOT graph for all commits has been written to '{}'",
            output_path.display()
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::areas::history::HistorySource;
    use crate::artifacts::objects::object_id::ObjectId;
    use pretty_assertions::assert_eq;

    struct FixedHistory(Vec<ObjectId>);

    impl HistorySource for FixedHistory {
        fn commit_ids(&self) -> anyhow::Result<Vec<ObjectId>> {
            Ok(self.0.clone())
        }
    }

    fn oid(fill: char) -> ObjectId {
        ObjectId::try_parse(fill.to_string().repeat(40)).unwrap()
    }

    fn repository_with_history(dir: &std::path::Path, ids: Vec<ObjectId>) -> Repository {
        Repository::with_history_source(
            &dir.to_string_lossy(),
            Box::new(std::io::sink()),
            Box::new(FixedHistory(ids)),
        )
        .unwrap()
    }

    #[test]
    fn writes_the_chain_document_for_a_fixed_history() {
        let dir = assert_fs::TempDir::new().unwrap();
        let repository = repository_with_history(dir.path(), vec![oid('a'), oid('b')]);

        repository.history_graph().unwrap();

        let document = std::fs::read_to_string(dir.path().join(HISTORY_GRAPH_FILE)).unwrap();
        let expected = format!(
            "graph git {{\n    \"{a}\" [label=\"aaaaaaa\"];\n    \"{b}\" [label=\"bbbbbbb\"];\n    \"{a}\" -- \"{b}\" [label=\"\"];\n}}\n",
            a = "a".repeat(40),
            b = "b".repeat(40),
        );
        assert_eq!(document, expected);
    }

    #[test]
    fn an_empty_history_writes_an_empty_graph() {
        let dir = assert_fs::TempDir::new().unwrap();
        let repository = repository_with_history(dir.path(), Vec::new());

        repository.history_graph().unwrap();

        let document = std::fs::read_to_string(dir.path().join(HISTORY_GRAPH_FILE)).unwrap();
        assert_eq!(document, "graph git {\n}\n");
    }

    #[test]
    fn a_failing_history_source_leaves_no_output_file() {
        struct FailingHistory;

        impl HistorySource for FailingHistory {
            fn commit_ids(&self) -> anyhow::Result<Vec<ObjectId>> {
                anyhow::bail!("history listing unavailable")
            }
        }

        let dir = assert_fs::TempDir::new().unwrap();
        let repository = Repository::with_history_source(
            &dir.path().to_string_lossy(),
            Box::new(std::io::sink()),
            Box::new(FailingHistory),
        )
        .unwrap();

        assert!(repository.history_graph().is_err());
        assert!(!dir.path().join(HISTORY_GRAPH_FILE).exists());
    }
}

use crate::areas::repository::Repository;
use crate::artifacts::graph::builder::GraphBuilder;
use crate::artifacts::graph::dot;
use anyhow::Context;
use std::io::Write;

/// Output file for the recursive commit/tree graph
pub const GRAPH_FILE: &str = "git_graph.dot";

impl Repository {
    pub fn graph(&self) -> anyhow::Result<()> {
        let head_oid = self.refs().resolve_head()?;

        let fragment = GraphBuilder::new(self).build(&head_oid)?;
        let document = dot::document(&fragment);

        let output_path = self.path().join(GRAPH_FILE);
        std::fs::write(&output_path, document).context(format!(
            "Unable to write graph file {}",
            output_path.display()
        ))?;

        writeln!(
            self.writer(),
            "DOT graph has been written to '{}'",
            output_path.display()
        )?;

        Ok(())
    }
}

//! Frame-by-frame search trace for `--trace`

use std::io::Write;

use super::output::{format_bound, format_node_list};
use crate::{
    Result,
    identifiers::NodeId,
    ports::SearchObserver,
    search::{SearchFrame, SearchResult},
};

/// Writes one line per visited frame and a closing summary.
pub struct TraceObserver<W> {
    out: W,
}

impl<W: Write> TraceObserver<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> SearchObserver for TraceObserver<W> {
    fn on_visit(&mut self, frame: &SearchFrame, path: &[NodeId], bound: Option<u64>) -> Result<()> {
        writeln!(
            self.out,
            "PATH: {}, Curr_Node: {}, Cost: {}, Bound: {}",
            format_node_list(path),
            frame.node,
            frame.cost,
            format_bound(bound)
        )?;
        Ok(())
    }

    fn on_search_end(&mut self, result: &SearchResult) -> Result<()> {
        let rule = "-".repeat(79);
        let path: Vec<String> = result.optimal_path.iter().map(ToString::to_string).collect();
        let expanded: Vec<String> = result.expansion_log.iter().map(ToString::to_string).collect();
        writeln!(self.out, "{rule}")?;
        writeln!(
            self.out,
            "Best Path: {}, with the Cost: {}",
            path.join("-> "),
            format_bound(result.optimal_cost)
        )?;
        writeln!(self.out, "Nodes Expanded: {}", expanded.join(", "))?;
        writeln!(self.out, "{rule}")?;
        Ok(())
    }
}

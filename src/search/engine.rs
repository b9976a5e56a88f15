//! Depth-first branch-and-bound engine.

use tracing::{debug, info, trace};

use super::{ExpansionLog, Heuristic, Incumbent, SearchFrame, SearchResult, SearchStats, ZeroHeuristic};
use crate::{
    Error, Result,
    identifiers::NodeId,
    ports::{EdgeStore, NullObserver, SearchObserver},
    tree::{TreeConfig, TreeShape},
};

/// Depth-First Branch-and-Bound over an [`EdgeStore`].
///
/// The engine owns the whole run state: the incumbent, the expansion log,
/// the counters and an explicit stack of pending frames. The trail holds the
/// path of the current frame; a frame at depth `d` truncates it to `d` nodes
/// before pushing its own node, which is sound because frames are popped in
/// depth-first preorder.
///
/// Children are explored ascending by weight (ties by child id). A sibling
/// is tested against the bound only after every earlier sibling's subtree has
/// completed, exactly as in the recursive formulation.
///
/// # Examples
///
/// ```
/// use dfbnb::adapters::InMemoryEdgeStore;
/// use dfbnb::search::SearchEngine;
/// use dfbnb::tree::{CostDistribution, TreeConfig, TreeGenerator};
///
/// let mut store = InMemoryEdgeStore::new();
/// let config = TreeConfig::new(2, 4, CostDistribution::Uniform);
/// TreeGenerator::seeded(1).generate(&config, &mut store)?;
///
/// let result = SearchEngine::new(&store, &config)?.run()?;
/// assert_eq!(result.optimal_path.len(), 5);
/// assert_eq!(result.expansion_log.as_slice()[0].value(), 1);
/// # Ok::<(), dfbnb::Error>(())
/// ```
pub struct SearchEngine<'s, S: ?Sized, H = ZeroHeuristic, O = NullObserver> {
    store: &'s S,
    shape: TreeShape,
    heuristic: H,
    observer: O,
    incumbent: Incumbent,
    expansion_log: ExpansionLog,
    stats: SearchStats,
    stack: Vec<SearchFrame>,
    trail: Vec<NodeId>,
}

impl<'s, S> SearchEngine<'s, S>
where
    S: EdgeStore + ?Sized,
{
    /// Engine for the tree described by `config`, stored in `store`.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `config` is invalid.
    pub fn new(store: &'s S, config: &TreeConfig) -> Result<Self> {
        let shape = config.shape()?;
        Ok(Self {
            store,
            shape,
            heuristic: ZeroHeuristic,
            observer: NullObserver,
            incumbent: Incumbent::new(),
            expansion_log: ExpansionLog::new(),
            stats: SearchStats::default(),
            stack: Vec::new(),
            trail: Vec::with_capacity(shape.depth() as usize + 1),
        })
    }
}

impl<'s, S, H, O> SearchEngine<'s, S, H, O>
where
    S: EdgeStore + ?Sized,
    H: Heuristic,
    O: SearchObserver,
{
    /// Replace the heuristic added to the path cost before pruning.
    pub fn with_heuristic<H2: Heuristic>(self, heuristic: H2) -> SearchEngine<'s, S, H2, O> {
        SearchEngine {
            store: self.store,
            shape: self.shape,
            heuristic,
            observer: self.observer,
            incumbent: self.incumbent,
            expansion_log: self.expansion_log,
            stats: self.stats,
            stack: self.stack,
            trail: self.trail,
        }
    }

    /// Attach an observer notified of every visit, prune, incumbent and expansion.
    pub fn with_observer<O2: SearchObserver>(self, observer: O2) -> SearchEngine<'s, S, H, O2> {
        SearchEngine {
            store: self.store,
            shape: self.shape,
            heuristic: self.heuristic,
            observer,
            incumbent: self.incumbent,
            expansion_log: self.expansion_log,
            stats: self.stats,
            stack: self.stack,
            trail: self.trail,
        }
    }

    /// Run the search to completion from the root.
    ///
    /// # Errors
    ///
    /// Returns a storage error if a lookup fails, a search inconsistency if an
    /// internal node lacks its children, and any error raised by the observer.
    pub fn run(mut self) -> Result<SearchResult> {
        info!(
            branching_factor = self.shape.branching_factor(),
            depth = self.shape.depth(),
            goal_rule = %self.shape.goal_rule(),
            "Starting depth-first branch-and-bound"
        );

        self.stack.push(SearchFrame::root());
        while let Some(frame) = self.stack.pop() {
            self.step(frame)?;
        }

        let (optimal_path, optimal_cost) = self.incumbent.into_parts();
        let result = SearchResult {
            optimal_path: optimal_path.unwrap_or_default(),
            optimal_cost,
            expansion_log: self.expansion_log,
            stats: self.stats,
        };

        info!(
            optimal_cost = ?result.optimal_cost,
            nodes_expanded = result.nodes_expanded(),
            frames_pruned = result.stats.frames_pruned,
            incumbent_updates = result.stats.incumbent_updates,
            "Search finished"
        );
        self.observer.on_search_end(&result)?;
        Ok(result)
    }

    fn step(&mut self, frame: SearchFrame) -> Result<()> {
        self.trail.truncate(frame.depth as usize);
        self.trail.push(frame.node);
        self.expansion_log.record(frame.node);
        self.stats.frames_visited += 1;
        self.stats.max_depth = self.stats.max_depth.max(frame.depth);

        let bound = self.incumbent.bound();
        trace!(
            path = ?self.trail,
            node = %frame.node,
            cost = frame.cost,
            bound = ?bound,
            "Visiting frame"
        );
        self.observer.on_visit(&frame, &self.trail, bound)?;

        let f = frame
            .cost
            .saturating_add(self.heuristic.estimate(frame.node, frame.depth));
        if let Some(bound) = bound.filter(|_| !self.incumbent.admits(f)) {
            self.stats.frames_pruned += 1;
            return self.observer.on_prune(&frame, f, bound);
        }

        if self.shape.is_goal(frame.node, frame.depth) {
            let previous = self.incumbent.improve(&self.trail, frame.cost);
            self.stats.incumbent_updates += 1;
            debug!(
                path = ?self.trail,
                cost = frame.cost,
                previous = ?previous,
                "Incumbent improved"
            );
            return self
                .observer
                .on_incumbent(&self.trail, frame.cost, previous);
        }

        let children = self.store.children_of(frame.node)?;
        let expected = self.shape.branching_factor();
        if children.len() != expected as usize {
            return Err(Error::SearchInconsistency {
                node: frame.node.value(),
                depth: frame.depth,
                found: children.len(),
                expected,
            });
        }
        self.stats.nodes_expanded += 1;
        self.observer.on_expand(&frame, &children)?;

        // Reverse so the lightest child is popped first.
        self.stack
            .extend(children.iter().rev().map(|edge| frame.child(edge.to, edge.weight)));
        Ok(())
    }
}

/// Run a plain branch-and-bound search over `store`.
pub fn search<S>(store: &S, config: &TreeConfig) -> Result<SearchResult>
where
    S: EdgeStore + ?Sized,
{
    SearchEngine::new(store, config)?.run()
}

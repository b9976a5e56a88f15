//! Observer port - abstraction for watching a search run
//!
//! This port lets callers follow the branch-and-bound traversal (tracing
//! output, invariant checks in tests, progress reporting) without coupling
//! the engine to any particular output format.

use crate::{
    Result,
    identifiers::NodeId,
    search::{SearchFrame, SearchResult},
    types::ChildEdge,
};

/// Observer trait for monitoring a search
///
/// # Event Sequence
///
/// For every frame taken off the stack:
/// 1. `on_visit(frame, path, bound)`
/// 2. exactly one of
///    - `on_prune(frame, f, bound)` when `f >= bound`,
///    - `on_incumbent(path, cost, previous)` when the frame is an accepted goal,
///    - `on_expand(frame, children)` otherwise.
///
/// `on_search_end(result)` is called once after the stack drains.
///
/// # Examples
///
/// ```
/// use dfbnb::{identifiers::NodeId, ports::SearchObserver};
///
/// #[derive(Default)]
/// struct IncumbentCounter {
///     updates: usize,
/// }
///
/// impl SearchObserver for IncumbentCounter {
///     fn on_incumbent(
///         &mut self,
///         _path: &[NodeId],
///         _cost: u64,
///         _previous: Option<u64>,
///     ) -> dfbnb::Result<()> {
///         self.updates += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait SearchObserver {
    /// Called when a frame is popped, before it is evaluated.
    ///
    /// `path` runs from the root to `frame.node`; `bound` is `None` while no
    /// solution has been found.
    fn on_visit(
        &mut self,
        _frame: &SearchFrame,
        _path: &[NodeId],
        _bound: Option<u64>,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when a frame is discarded because `f >= bound`.
    fn on_prune(&mut self, _frame: &SearchFrame, _f: u64, _bound: u64) -> Result<()> {
        Ok(())
    }

    /// Called when a goal improves the incumbent.
    fn on_incumbent(&mut self, _path: &[NodeId], _cost: u64, _previous: Option<u64>) -> Result<()> {
        Ok(())
    }

    /// Called when a frame's children are pushed, in exploration order.
    fn on_expand(&mut self, _frame: &SearchFrame, _children: &[ChildEdge]) -> Result<()> {
        Ok(())
    }

    /// Called once when the run completes.
    fn on_search_end(&mut self, _result: &SearchResult) -> Result<()> {
        Ok(())
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl SearchObserver for NullObserver {}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_visit(&mut self, frame: &SearchFrame, path: &[NodeId], bound: Option<u64>) -> Result<()> {
        (**self).on_visit(frame, path, bound)
    }

    fn on_prune(&mut self, frame: &SearchFrame, f: u64, bound: u64) -> Result<()> {
        (**self).on_prune(frame, f, bound)
    }

    fn on_incumbent(&mut self, path: &[NodeId], cost: u64, previous: Option<u64>) -> Result<()> {
        (**self).on_incumbent(path, cost, previous)
    }

    fn on_expand(&mut self, frame: &SearchFrame, children: &[ChildEdge]) -> Result<()> {
        (**self).on_expand(frame, children)
    }

    fn on_search_end(&mut self, result: &SearchResult) -> Result<()> {
        (**self).on_search_end(result)
    }
}

//! Incumbent tracking.

use crate::identifiers::NodeId;

/// Best complete solution found so far and the pruning bound it induces.
///
/// The bound starts at +infinity (`None`) and only ever decreases.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Incumbent {
    bound: Option<u64>,
    path: Option<Vec<NodeId>>,
    updates: u64,
}

impl Incumbent {
    /// Incumbent with an infinite bound and no path.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current bound, `None` while no solution is known.
    pub fn bound(&self) -> Option<u64> {
        self.bound
    }

    /// Path of the best solution.
    pub fn path(&self) -> Option<&[NodeId]> {
        self.path.as_deref()
    }

    /// Number of times the incumbent improved.
    pub fn updates(&self) -> u64 {
        self.updates
    }

    /// Whether an evaluation `f` survives the pruning test `f >= bound`.
    ///
    /// Ties are rejected, so the first solution found at a given cost is kept.
    pub fn admits(&self, f: u64) -> bool {
        self.bound.is_none_or(|bound| f < bound)
    }

    /// Replace the incumbent with a strictly better solution.
    ///
    /// Returns the previous bound.
    pub fn improve(&mut self, path: &[NodeId], cost: u64) -> Option<u64> {
        debug_assert!(self.admits(cost), "incumbent bound must strictly decrease");
        let previous = self.bound.replace(cost);
        self.path = Some(path.to_vec());
        self.updates += 1;
        previous
    }

    /// Consume the incumbent into `(path, cost)`.
    pub fn into_parts(self) -> (Option<Vec<NodeId>>, Option<u64>) {
        (self.path, self.bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infinite_bound_admits_everything() {
        let incumbent = Incumbent::new();
        assert!(incumbent.admits(u64::MAX));
        assert_eq!(incumbent.bound(), None);
        assert!(incumbent.path().is_none());
    }

    #[test]
    fn ties_are_rejected() {
        let mut incumbent = Incumbent::new();
        let previous = incumbent.improve(&[NodeId::ROOT, NodeId::new(2)], 5);
        assert_eq!(previous, None);
        assert!(!incumbent.admits(5));
        assert!(!incumbent.admits(6));
        assert!(incumbent.admits(4));
    }

    #[test]
    fn improvements_replace_the_path() {
        let mut incumbent = Incumbent::new();
        incumbent.improve(&[NodeId::ROOT, NodeId::new(2)], 5);
        let previous = incumbent.improve(&[NodeId::ROOT, NodeId::new(3)], 2);
        assert_eq!(previous, Some(5));
        assert_eq!(incumbent.updates(), 2);
        let (path, cost) = incumbent.into_parts();
        assert_eq!(path, Some(vec![NodeId::ROOT, NodeId::new(3)]));
        assert_eq!(cost, Some(2));
    }
}

//! Aggregated sweep results

use std::collections::BTreeMap;

use serde::Serialize;

/// Summary of all repetitions of one `(branching_factor, depth)` cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CellSummary {
    pub branching_factor: u32,
    pub depth: u32,
    pub repetitions: usize,
    /// Mean length of the expansion log
    pub mean_expanded: f64,
    /// Sample standard deviation of the expansion log length (0 for one repetition)
    pub std_dev_expanded: f64,
    pub min_expanded: usize,
    pub max_expanded: usize,
    /// Mean optimal cost over repetitions that found a solution
    pub mean_cost: f64,
}

impl CellSummary {
    /// Summarise per-repetition expansion counts and optimal costs.
    ///
    /// Returns `None` when there are no repetitions.
    pub fn from_runs(
        branching_factor: u32,
        depth: u32,
        expanded: &[usize],
        costs: &[u64],
    ) -> Option<Self> {
        use statrs::statistics::Statistics;

        if expanded.is_empty() {
            return None;
        }
        let samples: Vec<f64> = expanded.iter().map(|&n| n as f64).collect();
        let mean_expanded = samples.iter().mean();
        let std_dev_expanded = if samples.len() > 1 {
            samples.iter().std_dev()
        } else {
            0.0
        };
        let mean_cost = if costs.is_empty() {
            f64::NAN
        } else {
            costs.iter().map(|&c| c as f64).collect::<Vec<_>>().iter().mean()
        };

        Some(Self {
            branching_factor,
            depth,
            repetitions: expanded.len(),
            mean_expanded,
            std_dev_expanded,
            min_expanded: expanded.iter().copied().fold(usize::MAX, usize::min),
            max_expanded: expanded.iter().copied().fold(0, usize::max),
            mean_cost,
        })
    }
}

/// Table of cell summaries keyed by branching factor (rows) and depth (columns).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultsTable {
    branching_factors: Vec<u32>,
    depths: Vec<u32>,
    #[serde(skip)]
    cells: BTreeMap<(u32, u32), CellSummary>,
}

impl ResultsTable {
    /// Empty table with the given row and column labels.
    pub fn new(branching_factors: &[u32], depths: &[u32]) -> Self {
        Self {
            branching_factors: branching_factors.to_vec(),
            depths: depths.to_vec(),
            cells: BTreeMap::new(),
        }
    }

    pub fn branching_factors(&self) -> &[u32] {
        &self.branching_factors
    }

    pub fn depths(&self) -> &[u32] {
        &self.depths
    }

    pub fn insert(&mut self, summary: CellSummary) {
        self.cells
            .insert((summary.branching_factor, summary.depth), summary);
    }

    pub fn get(&self, branching_factor: u32, depth: u32) -> Option<&CellSummary> {
        self.cells.get(&(branching_factor, depth))
    }

    /// Mean expansion count of a cell, if it was run.
    pub fn mean_expanded(&self, branching_factor: u32, depth: u32) -> Option<f64> {
        self.get(branching_factor, depth).map(|cell| cell.mean_expanded)
    }

    /// Completed cells, ordered by branching factor then depth.
    pub fn cells(&self) -> impl Iterator<Item = &CellSummary> {
        self.cells.values()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_statistics() {
        let summary = CellSummary::from_runs(3, 4, &[10, 20, 30], &[2, 4, 6]).unwrap();
        assert_eq!(summary.repetitions, 3);
        assert!((summary.mean_expanded - 20.0).abs() < 1e-9);
        assert!((summary.std_dev_expanded - 10.0).abs() < 1e-9);
        assert_eq!(summary.min_expanded, 10);
        assert_eq!(summary.max_expanded, 30);
        assert!((summary.mean_cost - 4.0).abs() < 1e-9);
    }

    #[test]
    fn single_repetition_has_zero_spread() {
        let summary = CellSummary::from_runs(2, 2, &[5], &[0]).unwrap();
        assert_eq!(summary.std_dev_expanded, 0.0);
        assert!(CellSummary::from_runs(2, 2, &[], &[]).is_none());
    }

    #[test]
    fn table_lookup() {
        let mut table = ResultsTable::new(&[2, 3], &[4]);
        table.insert(CellSummary::from_runs(3, 4, &[7], &[1]).unwrap());
        assert_eq!(table.mean_expanded(3, 4), Some(7.0));
        assert_eq!(table.mean_expanded(2, 4), None);
        assert_eq!(table.len(), 1);
    }
}

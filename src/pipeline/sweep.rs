//! Parameter sweep over branching factors and depths
//!
//! The sweep runs every `(branching_factor, depth)` cell a number of times,
//! averages the expansion counts and checkpoints the table to CSV after each
//! depth. A failing cell stops the sweep; the results gathered so far are
//! saved and returned alongside the failure.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use super::results::{CellSummary, ResultsTable};
use crate::{
    Result,
    app::{App, ExperimentConfig, ExperimentOutcome, StorageLocation},
    error::Error,
    export::ResultsCsvExporter,
    tree::{CostDistribution, GoalRule, TreeConfig},
};

/// Sweep configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Branching factors to test (table rows)
    pub branching_factors: Vec<u32>,

    /// Depths to test (table columns)
    pub depths: Vec<u32>,

    /// Runs per cell
    pub repetitions: usize,

    /// Edge cost distribution for every generated tree
    pub distribution: CostDistribution,

    /// Goal rule for every generated tree
    pub goal_rule: GoalRule,

    /// Directory holding the per-cell SQLite stores
    pub db_dir: PathBuf,

    /// Directory receiving the CSV tables
    pub output_dir: PathBuf,

    /// Prefix of store and result file names
    pub file_prefix: String,

    /// Base seed; per-run seeds are derived from it
    pub seed: Option<u64>,

    /// Keep the stores in memory instead of under `db_dir`
    pub in_memory: bool,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            branching_factors: vec![2, 3, 4],
            depths: vec![4, 6],
            repetitions: 12,
            distribution: CostDistribution::ZeroOrOne,
            goal_rule: GoalRule::default(),
            db_dir: PathBuf::from("databases"),
            output_dir: PathBuf::from("results"),
            file_prefix: "experiment".to_string(),
            seed: None,
            in_memory: false,
        }
    }
}

impl SweepConfig {
    /// Store location of a cell.
    pub fn store_path(&self, branching_factor: u32, depth: u32) -> PathBuf {
        self.db_dir.join(format!(
            "{}_graph_b{branching_factor}_d{depth}.db",
            self.file_prefix
        ))
    }

    /// Path of the wide mean-expansion table.
    pub fn results_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}_results.csv", self.file_prefix))
    }

    /// Path of the per-cell statistics table.
    pub fn cells_path(&self) -> PathBuf {
        self.output_dir
            .join(format!("{}_cells.csv", self.file_prefix))
    }

    /// Total number of experiment runs.
    pub fn total_runs(&self) -> usize {
        self.branching_factors.len() * self.depths.len() * self.repetitions
    }

    /// Seed of repetition `rep` of the cell at `cell_index`, if seeded.
    pub fn run_seed(&self, cell_index: usize, rep: usize) -> Option<u64> {
        self.seed
            .map(|base| base.wrapping_add((cell_index * self.repetitions + rep) as u64))
    }

    fn validate(&self) -> Result<()> {
        if self.repetitions == 0 {
            return Err(Error::InvalidConfiguration {
                message: "sweep needs at least one repetition".to_string(),
            });
        }
        if self.branching_factors.is_empty() || self.depths.is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "sweep needs at least one branching factor and one depth".to_string(),
            });
        }
        for &branching_factor in &self.branching_factors {
            for &depth in &self.depths {
                TreeConfig::new(branching_factor, depth, self.distribution)
                    .with_goal_rule(self.goal_rule)
                    .validate()?;
            }
        }
        Ok(())
    }
}

/// Cell that stopped a sweep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepFailure {
    pub branching_factor: u32,
    pub depth: u32,
    pub message: String,
}

/// Result of a sweep run
#[derive(Debug, Clone, Serialize)]
pub struct SweepOutcome {
    pub table: ResultsTable,
    /// Set when a cell failed and the sweep stopped early
    pub failure: Option<SweepFailure>,
    /// Where the wide table was written
    pub results_path: PathBuf,
}

impl SweepOutcome {
    pub fn is_complete(&self) -> bool {
        self.failure.is_none()
    }
}

/// Observer of sweep progress
///
/// All methods default to no-ops.
pub trait SweepObserver {
    fn on_sweep_start(&mut self, _total_runs: usize) {}

    fn on_cell_start(&mut self, _branching_factor: u32, _depth: u32) {}

    fn on_run_complete(
        &mut self,
        _branching_factor: u32,
        _depth: u32,
        _repetition: usize,
        _outcome: &ExperimentOutcome,
    ) {
    }

    fn on_cell_complete(&mut self, _summary: &CellSummary) {}

    fn on_sweep_end(&mut self, _outcome: &SweepOutcome) {}
}

impl SweepObserver for () {}

/// Runs a [`SweepConfig`] through an [`App`].
///
/// # Examples
///
/// ```no_run
/// use dfbnb::app::App;
/// use dfbnb::pipeline::{Sweep, SweepConfig};
///
/// let config = SweepConfig {
///     branching_factors: vec![2, 3],
///     depths: vec![4, 6],
///     repetitions: 5,
///     seed: Some(42),
///     ..SweepConfig::default()
/// };
/// let outcome = Sweep::new(App::new(), config).run()?;
/// println!("{:?}", outcome.table.mean_expanded(2, 4));
/// # Ok::<(), dfbnb::Error>(())
/// ```
pub struct Sweep {
    app: App,
    config: SweepConfig,
}

impl Sweep {
    pub fn new(app: App, config: SweepConfig) -> Self {
        Self { app, config }
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Run the sweep without progress reporting.
    pub fn run(&self) -> Result<SweepOutcome> {
        self.run_with_observer(&mut ())
    }

    /// Run the sweep, reporting progress to `observer`.
    ///
    /// # Errors
    ///
    /// Configuration errors and failures to create directories or write the
    /// CSV tables are returned as errors. A failing cell is not: it ends the
    /// sweep and is reported in [`SweepOutcome::failure`].
    pub fn run_with_observer(&self, observer: &mut dyn SweepObserver) -> Result<SweepOutcome> {
        let config = &self.config;
        config.validate()?;

        if !config.in_memory {
            create_dir(&config.db_dir)?;
        }
        create_dir(&config.output_dir)?;

        info!(
            depths = ?config.depths,
            branching_factors = ?config.branching_factors,
            repetitions = config.repetitions,
            distribution = %config.distribution,
            "Starting the experiment"
        );
        observer.on_sweep_start(config.total_runs());

        let mut table = ResultsTable::new(&config.branching_factors, &config.depths);
        let mut cell_index = 0;
        for &depth in &config.depths {
            info!(depth, "Sweeping depth");
            for &branching_factor in &config.branching_factors {
                observer.on_cell_start(branching_factor, depth);
                match self.run_cell(cell_index, branching_factor, depth, observer) {
                    Ok(summary) => {
                        info!(
                            branching_factor,
                            depth,
                            mean_expanded = summary.mean_expanded,
                            "Cell complete"
                        );
                        observer.on_cell_complete(&summary);
                        table.insert(summary);
                    }
                    Err(err) => {
                        error!(branching_factor, depth, error = %err, "Cell failed, saving partial results");
                        let outcome = SweepOutcome {
                            results_path: self.save(&table)?,
                            table,
                            failure: Some(SweepFailure {
                                branching_factor,
                                depth,
                                message: err.to_string(),
                            }),
                        };
                        observer.on_sweep_end(&outcome);
                        return Ok(outcome);
                    }
                }
                cell_index += 1;
            }
            self.save(&table)?;
        }

        let outcome = SweepOutcome {
            results_path: self.save(&table)?,
            table,
            failure: None,
        };
        info!(path = %outcome.results_path.display(), "Finished");
        observer.on_sweep_end(&outcome);
        Ok(outcome)
    }

    fn run_cell(
        &self,
        cell_index: usize,
        branching_factor: u32,
        depth: u32,
        observer: &mut dyn SweepObserver,
    ) -> Result<CellSummary> {
        let config = &self.config;
        let storage = if config.in_memory {
            StorageLocation::SqliteInMemory
        } else {
            StorageLocation::Sqlite(config.store_path(branching_factor, depth))
        };

        let mut expanded = Vec::with_capacity(config.repetitions);
        let mut costs = Vec::with_capacity(config.repetitions);
        for rep in 0..config.repetitions {
            let mut experiment =
                ExperimentConfig::new(branching_factor, depth, config.distribution)
                    .with_goal_rule(config.goal_rule)
                    .with_storage(storage.clone());
            if let Some(seed) = config.run_seed(cell_index, rep) {
                experiment = experiment.with_seed(seed);
            }

            let outcome = self.app.run(&experiment)?;
            expanded.push(outcome.search.nodes_expanded());
            match outcome.search.optimal_cost {
                Some(cost) => costs.push(cost),
                None => warn!(branching_factor, depth, rep, "Search found no goal"),
            }
            observer.on_run_complete(branching_factor, depth, rep, &outcome);
        }

        CellSummary::from_runs(branching_factor, depth, &expanded, &costs).ok_or_else(|| {
            Error::InvalidConfiguration {
                message: "sweep needs at least one repetition".to_string(),
            }
        })
    }

    fn save(&self, table: &ResultsTable) -> Result<PathBuf> {
        let results_path = self.config.results_path();
        ResultsCsvExporter::write_table(table, &results_path)?;
        ResultsCsvExporter::write_cells(table, &self.config.cells_path())?;
        info!(path = %results_path.display(), "Results saved");
        Ok(results_path)
    }
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| Error::Io {
        operation: format!("create directory {path:?}"),
        source,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn config_in(dir: &Path) -> SweepConfig {
        SweepConfig {
            branching_factors: vec![2, 3],
            depths: vec![2, 3],
            repetitions: 3,
            distribution: CostDistribution::Uniform,
            db_dir: dir.join("databases"),
            output_dir: dir.join("results"),
            file_prefix: "unit".to_string(),
            seed: Some(11),
            ..SweepConfig::default()
        }
    }

    #[test]
    fn run_seeds_are_distinct_per_run() {
        let config = SweepConfig {
            repetitions: 4,
            seed: Some(100),
            ..SweepConfig::default()
        };
        assert_eq!(config.run_seed(0, 0), Some(100));
        assert_eq!(config.run_seed(0, 3), Some(103));
        assert_eq!(config.run_seed(1, 0), Some(104));
        let unseeded = SweepConfig::default();
        assert_eq!(unseeded.run_seed(2, 1), None);
    }

    #[test]
    fn sweep_fills_every_cell_and_writes_tables() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = config_in(temp_dir.path());
        let outcome = Sweep::new(App::new(), config.clone()).run().unwrap();

        assert!(outcome.is_complete());
        assert_eq!(outcome.table.len(), 4);
        for b in [2, 3] {
            for d in [2, 3] {
                let cell = outcome.table.get(b, d).unwrap();
                assert_eq!(cell.repetitions, 3);
                assert!(cell.mean_expanded >= f64::from(d + 1));
            }
        }
        assert!(outcome.results_path.exists());
        assert!(config.cells_path().exists());
        assert!(config.store_path(3, 3).exists());
    }

    #[test]
    fn seeded_sweeps_are_reproducible() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut config = config_in(temp_dir.path());
        config.in_memory = true;
        let first = Sweep::new(App::new(), config.clone()).run().unwrap();
        let second = Sweep::new(App::new(), config).run().unwrap();
        assert_eq!(first.table, second.table);
    }

    #[test]
    fn zero_repetitions_is_rejected() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut config = config_in(temp_dir.path());
        config.repetitions = 0;
        let err = Sweep::new(App::new(), config).run().unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::Configuration);
    }
}

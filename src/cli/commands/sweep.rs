//! Sweep command - Average expansion counts over a parameter grid

use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use indicatif::ProgressBar;

use crate::{
    app::{App, ExperimentOutcome},
    cli::output::{create_sweep_progress, print_kv, print_section, print_subsection},
    pipeline::{
        CellSummary, ResultsTable, Sweep, SweepConfig, SweepObserver, SweepOutcome, SweepPreset,
    },
    tree::{CostDistribution, GoalRule},
};

#[derive(Parser, Debug)]
#[command(about = "Run a parameter sweep and save the results table")]
pub struct SweepArgs {
    /// Start from a named preset: normal, anomaly, normal-high, anomaly-high
    #[arg(long)]
    pub preset: Option<SweepPreset>,

    /// Branching factors (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub branching_factors: Option<Vec<u32>>,

    /// Depths (comma separated)
    #[arg(long, value_delimiter = ',')]
    pub depths: Option<Vec<u32>>,

    /// Runs per cell
    #[arg(long, short = 'r')]
    pub repetitions: Option<usize>,

    /// Edge cost distribution: zero_or_one, uniform or custom
    #[arg(long)]
    pub distribution: Option<CostDistribution>,

    /// Goal rule: depth or threshold
    #[arg(long)]
    pub goal_rule: Option<GoalRule>,

    /// Directory for the per-cell databases
    #[arg(long)]
    pub db_dir: Option<PathBuf>,

    /// Directory for the result tables
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// File name prefix for databases and results
    #[arg(long)]
    pub prefix: Option<String>,

    /// Base random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep the databases in memory
    #[arg(long)]
    pub in_memory: bool,

    /// Hide the progress bar
    #[arg(long)]
    pub no_progress: bool,
}

impl SweepArgs {
    /// Preset (or default) configuration with explicit flags applied.
    pub fn to_config(&self) -> SweepConfig {
        let mut config = self
            .preset
            .map_or_else(SweepConfig::default, |preset| preset.config());
        if let Some(branching_factors) = &self.branching_factors {
            config.branching_factors = branching_factors.clone();
        }
        if let Some(depths) = &self.depths {
            config.depths = depths.clone();
        }
        if let Some(repetitions) = self.repetitions {
            config.repetitions = repetitions;
        }
        if let Some(distribution) = self.distribution {
            config.distribution = distribution;
        }
        if let Some(goal_rule) = self.goal_rule {
            config.goal_rule = goal_rule;
        }
        if let Some(db_dir) = &self.db_dir {
            config.db_dir = db_dir.clone();
        }
        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.file_prefix = prefix.clone();
        }
        config.seed = self.seed.or(config.seed);
        config.in_memory |= self.in_memory;
        config
    }
}

struct ProgressReporter {
    bar: Option<ProgressBar>,
}

impl SweepObserver for ProgressReporter {
    fn on_sweep_start(&mut self, total_runs: usize) {
        if let Some(bar) = &self.bar {
            bar.set_length(total_runs as u64);
        }
    }

    fn on_cell_start(&mut self, branching_factor: u32, depth: u32) {
        if let Some(bar) = &self.bar {
            bar.set_message(format!("b={branching_factor} d={depth}"));
        }
    }

    fn on_run_complete(
        &mut self,
        _branching_factor: u32,
        _depth: u32,
        _repetition: usize,
        _outcome: &ExperimentOutcome,
    ) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    fn on_cell_complete(&mut self, summary: &CellSummary) {
        if let Some(bar) = &self.bar {
            bar.println(format!(
                "b={} d={}: mean expanded {:.1} (sd {:.1})",
                summary.branching_factor,
                summary.depth,
                summary.mean_expanded,
                summary.std_dev_expanded
            ));
        }
    }

    fn on_sweep_end(&mut self, _outcome: &SweepOutcome) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

pub fn execute(args: SweepArgs) -> Result<()> {
    let config = args.to_config();

    print_section("Sweep configuration");
    print_kv("Branching factors", &format!("{:?}", config.branching_factors));
    print_kv("Depths", &format!("{:?}", config.depths));
    print_kv("Repetitions", &config.repetitions.to_string());
    print_kv("Distribution", &config.distribution.to_string());
    print_kv("Goal rule", &config.goal_rule.to_string());
    if let Some(seed) = config.seed {
        print_kv("Seed", &seed.to_string());
    }

    let mut reporter = ProgressReporter {
        bar: (!args.no_progress).then(|| create_sweep_progress(config.total_runs() as u64)),
    };
    let outcome = Sweep::new(App::new(), config).run_with_observer(&mut reporter)?;

    print_results_table(&outcome.table);
    print_kv("Results", &outcome.results_path.display().to_string());

    if let Some(failure) = outcome.failure {
        bail!(
            "Sweep stopped at branching factor {} depth {}: {}",
            failure.branching_factor,
            failure.depth,
            failure.message
        );
    }
    Ok(())
}

fn print_results_table(table: &ResultsTable) {
    print_subsection("Mean nodes expanded");
    let mut header = format!("  {:>6}", "b \\ d");
    for depth in table.depths() {
        header.push_str(&format!(" {depth:>12}"));
    }
    println!("{header}");
    for &branching_factor in table.branching_factors() {
        let mut row = format!("  {branching_factor:>6}");
        for &depth in table.depths() {
            match table.mean_expanded(branching_factor, depth) {
                Some(mean) => row.push_str(&format!(" {mean:>12.1}")),
                None => row.push_str(&format!(" {:>12}", "-")),
            }
        }
        println!("{row}");
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        args: SweepArgs,
    }

    #[test]
    fn flags_override_preset() {
        let harness = Harness::parse_from([
            "sweep",
            "--preset",
            "anomaly",
            "--branching-factors",
            "3,4",
            "--depths",
            "6",
            "--seed",
            "7",
        ]);
        let config = harness.args.to_config();
        assert_eq!(config.distribution, CostDistribution::ZeroOrOne);
        assert_eq!(config.branching_factors, vec![3, 4]);
        assert_eq!(config.depths, vec![6]);
        assert_eq!(config.repetitions, 10);
        assert_eq!(config.file_prefix, "anomaly_conditions");
        assert_eq!(config.seed, Some(7));
    }

    #[test]
    fn defaults_without_preset() {
        let harness = Harness::parse_from(["sweep", "--distribution", "uniform"]);
        let config = harness.args.to_config();
        assert_eq!(config.distribution, CostDistribution::Uniform);
        assert_eq!(config.file_prefix, SweepConfig::default().file_prefix);
    }
}

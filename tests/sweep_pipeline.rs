//! Tests for the sweep harness and its CSV output

use std::fs;

use dfbnb::{
    App, CostDistribution,
    export::ResultsCsvExporter,
    pipeline::{Sweep, SweepConfig, SweepPreset},
};
use tempfile::TempDir;

fn small_sweep(dir: &std::path::Path) -> SweepConfig {
    SweepConfig {
        branching_factors: vec![2, 3],
        depths: vec![2, 3],
        repetitions: 4,
        distribution: CostDistribution::ZeroOrOne,
        db_dir: dir.join("databases"),
        output_dir: dir.join("results"),
        file_prefix: "small".to_string(),
        seed: Some(42),
        ..SweepConfig::default()
    }
}

#[test]
fn test_sweep_writes_wide_table() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config = small_sweep(temp_dir.path());
    let outcome = Sweep::new(App::new(), config.clone()).run().unwrap();

    assert!(outcome.is_complete());
    let text = fs::read_to_string(&outcome.results_path).unwrap();
    assert_eq!(text.lines().next(), Some("branching_factor,2,3"));
    assert_eq!(text.lines().count(), 3);

    let entries = ResultsCsvExporter::read_table(&outcome.results_path).unwrap();
    assert_eq!(entries.len(), 4);
    for (b, d, mean) in entries {
        let expected = outcome.table.mean_expanded(b, d).unwrap();
        assert!((mean - expected).abs() < 1e-6, "b={b} d={d}");
    }
}

#[test]
fn test_failed_cell_keeps_partial_results() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let mut config = small_sweep(temp_dir.path());
    config.depths = vec![2];
    // A directory where the b=3 store should be makes that cell fail.
    fs::create_dir_all(config.store_path(3, 2)).unwrap();

    let outcome = Sweep::new(App::new(), config.clone()).run().unwrap();

    let failure = outcome.failure.clone().expect("b=3 cell should fail");
    assert_eq!((failure.branching_factor, failure.depth), (3, 2));
    assert!(outcome.table.get(2, 2).is_some());
    assert!(outcome.table.get(3, 2).is_none());

    let text = fs::read_to_string(config.results_path()).unwrap();
    let rows: Vec<&str> = text.lines().collect();
    assert_eq!(rows[0], "branching_factor,2");
    assert!(rows[1].starts_with("2,"));
    assert_eq!(rows[2], "3,");
}

#[test]
fn test_presets_are_valid_sweeps() {
    for preset in SweepPreset::ALL {
        let config = preset.config();
        assert_eq!(config.total_runs(), config.branching_factors.len() * 3 * 10);
        for &b in &config.branching_factors {
            for &d in &config.depths {
                dfbnb::TreeConfig::new(b, d, config.distribution)
                    .validate()
                    .unwrap();
            }
        }
    }
}

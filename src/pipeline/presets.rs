//! Named sweep presets for the normal and anomaly experiment conditions.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::sweep::SweepConfig;
use crate::{Error, Result, tree::CostDistribution};

const PRESET_REPETITIONS: usize = 10;

/// Canned sweep configurations.
///
/// "Normal" conditions draw weights uniformly from `1..=10`; "anomaly"
/// conditions use `{0, 1}` weights, where ties defeat most pruning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SweepPreset {
    Normal,
    Anomaly,
    NormalHigh,
    AnomalyHigh,
}

impl SweepPreset {
    pub const ALL: [SweepPreset; 4] = [
        SweepPreset::Normal,
        SweepPreset::Anomaly,
        SweepPreset::NormalHigh,
        SweepPreset::AnomalyHigh,
    ];

    pub fn distribution(&self) -> CostDistribution {
        match self {
            SweepPreset::Normal | SweepPreset::NormalHigh => CostDistribution::Uniform,
            SweepPreset::Anomaly | SweepPreset::AnomalyHigh => CostDistribution::ZeroOrOne,
        }
    }

    pub fn file_prefix(&self) -> &'static str {
        match self {
            SweepPreset::Normal => "normal_conditions",
            SweepPreset::Anomaly => "anomaly_conditions",
            SweepPreset::NormalHigh => "normal_conditions_high",
            SweepPreset::AnomalyHigh => "anomaly_conditions_high",
        }
    }

    fn is_high(&self) -> bool {
        matches!(self, SweepPreset::NormalHigh | SweepPreset::AnomalyHigh)
    }

    /// Full sweep configuration for this preset.
    pub fn config(&self) -> SweepConfig {
        let (branching_factors, depths): (Vec<u32>, Vec<u32>) = if self.is_high() {
            ((5..=8).collect(), vec![10, 12, 14])
        } else {
            ((3..=8).collect(), vec![6, 8, 10])
        };
        SweepConfig {
            branching_factors,
            depths,
            repetitions: PRESET_REPETITIONS,
            distribution: self.distribution(),
            file_prefix: self.file_prefix().to_string(),
            ..SweepConfig::default()
        }
    }
}

impl fmt::Display for SweepPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SweepPreset::Normal => "normal",
            SweepPreset::Anomaly => "anomaly",
            SweepPreset::NormalHigh => "normal-high",
            SweepPreset::AnomalyHigh => "anomaly-high",
        };
        f.write_str(label)
    }
}

impl FromStr for SweepPreset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalised = s.trim().to_ascii_lowercase().replace('_', "-");
        SweepPreset::ALL
            .into_iter()
            .find(|preset| preset.to_string() == normalised)
            .ok_or_else(|| Error::InvalidConfiguration {
                message: format!(
                    "unknown sweep preset '{s}'. Expected one of: normal, anomaly, normal-high, anomaly-high"
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anomaly_preset_uses_binary_weights() {
        let config = SweepPreset::Anomaly.config();
        assert_eq!(config.distribution, CostDistribution::ZeroOrOne);
        assert_eq!(config.branching_factors, vec![3, 4, 5, 6, 7, 8]);
        assert_eq!(config.depths, vec![6, 8, 10]);
        assert_eq!(config.repetitions, 10);
        assert!(
            config
                .results_path()
                .ends_with("anomaly_conditions_results.csv")
        );
    }

    #[test]
    fn high_presets_use_deeper_trees() {
        let config = SweepPreset::NormalHigh.config();
        assert_eq!(config.distribution, CostDistribution::Uniform);
        assert_eq!(config.branching_factors, vec![5, 6, 7, 8]);
        assert_eq!(config.depths, vec![10, 12, 14]);
        assert_eq!(
            config.store_path(5, 10),
            std::path::Path::new("databases/normal_conditions_high_graph_b5_d10.db")
        );
    }

    #[test]
    fn presets_parse_from_display() {
        for preset in SweepPreset::ALL {
            assert_eq!(preset.to_string().parse::<SweepPreset>().unwrap(), preset);
        }
        assert_eq!(
            "ANOMALY_HIGH".parse::<SweepPreset>().unwrap(),
            SweepPreset::AnomalyHigh
        );
        assert!("extreme".parse::<SweepPreset>().is_err());
    }
}

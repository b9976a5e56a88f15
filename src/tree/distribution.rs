//! Edge cost distributions.

use std::{fmt, ops::RangeInclusive, str::FromStr};

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Rule for sampling the weight of each generated edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum CostDistribution {
    /// Uniform integer in {0, 1}. Produces many ties, which stresses pruning.
    #[default]
    ZeroOrOne,
    /// Uniform integer in {1, ..., 10}.
    Uniform,
    /// Floor of a uniform real draw in [1, 5), i.e. {1, ..., 4}.
    Custom,
}

impl CostDistribution {
    /// Every supported distribution.
    pub const ALL: [CostDistribution; 3] = [
        CostDistribution::ZeroOrOne,
        CostDistribution::Uniform,
        CostDistribution::Custom,
    ];

    /// Draw one edge weight.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        match self {
            CostDistribution::ZeroOrOne => rng.random_range(0..=1),
            CostDistribution::Uniform => rng.random_range(1..=10),
            CostDistribution::Custom => rng.random_range(1.0_f64..5.0).floor() as u32,
        }
    }

    /// Inclusive range of weights this distribution can produce.
    pub fn range(&self) -> RangeInclusive<u32> {
        match self {
            CostDistribution::ZeroOrOne => 0..=1,
            CostDistribution::Uniform => 1..=10,
            CostDistribution::Custom => 1..=4,
        }
    }
}

impl fmt::Display for CostDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CostDistribution::ZeroOrOne => "zero_or_one",
            CostDistribution::Uniform => "uniform",
            CostDistribution::Custom => "custom",
        };
        f.write_str(label)
    }
}

impl FromStr for CostDistribution {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalised = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalised.as_str() {
            "zero_or_one" | "binary" => Ok(CostDistribution::ZeroOrOne),
            "uniform" => Ok(CostDistribution::Uniform),
            "custom" => Ok(CostDistribution::Custom),
            _ => Err(crate::Error::ParseDistribution {
                input: s.to_string(),
                expected: "zero_or_one, uniform, custom".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn samples_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for distribution in CostDistribution::ALL {
            let range = distribution.range();
            for _ in 0..2_000 {
                let weight = distribution.sample(&mut rng);
                assert!(range.contains(&weight), "{distribution}: {weight}");
            }
        }
    }

    #[test]
    fn samples_cover_the_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for distribution in CostDistribution::ALL {
            let mut seen = std::collections::BTreeSet::new();
            for _ in 0..5_000 {
                seen.insert(distribution.sample(&mut rng));
            }
            let expected: std::collections::BTreeSet<u32> = distribution.range().collect();
            assert_eq!(seen, expected, "{distribution} should hit every weight");
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(
            "Zero-Or-One".parse::<CostDistribution>().unwrap(),
            CostDistribution::ZeroOrOne
        );
        assert_eq!(
            " uniform ".parse::<CostDistribution>().unwrap(),
            CostDistribution::Uniform
        );
        for distribution in CostDistribution::ALL {
            let parsed: CostDistribution = distribution.to_string().parse().unwrap();
            assert_eq!(parsed, distribution);
        }
    }

    #[test]
    fn unknown_name_is_a_configuration_error() {
        let err = "gaussian".parse::<CostDistribution>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
    }
}

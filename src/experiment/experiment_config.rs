use crate::experiment::ExperimentError;
use crate::maze::DEFAULT_MAX_ATTEMPTS;
use crate::search::{HeuristicName, SearchLimits, StrategyName};
use serde::{Deserialize, Serialize};
use std::{fs, ops::Range, path::Path};
use strum::IntoEnumIterator;

/// A batch of maze runs: every strategy is run on one maze per
/// (size, density, seed) combination.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ExperimentConfig {
    pub sizes: Vec<usize>,
    pub densities: Vec<f64>,
    /// Number of seeds per (size, density) pair, counting up from
    /// `first-seed`
    pub seeds: u64,
    #[serde(default)]
    pub first_seed: u64,
    #[serde(default = "all_strategies")]
    pub strategies: Vec<StrategyName>,
    #[serde(default)]
    pub heuristic: HeuristicName,
    #[serde(default)]
    pub max_expansions: Option<usize>,
    #[serde(default)]
    pub time_limit_secs: Option<f64>,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
}

fn all_strategies() -> Vec<StrategyName> {
    StrategyName::iter().collect()
}

fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

impl ExperimentConfig {
    pub fn from_path(path: &Path) -> Result<Self, ExperimentError> {
        let text = fs::read_to_string(path).map_err(|source| ExperimentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text)
    }

    pub fn from_text(text: &str) -> Result<Self, ExperimentError> {
        let config: Self = toml::from_str(text)?;
        config.check()?;
        Ok(config)
    }

    fn check(&self) -> Result<(), ExperimentError> {
        if self.sizes.is_empty() || self.densities.is_empty() || self.seeds == 0 {
            return Err(ExperimentError::InvalidConfig(
                "sizes, densities and seeds must not be empty".to_string(),
            ));
        }
        if self.strategies.is_empty() {
            return Err(ExperimentError::InvalidConfig(
                "at least one strategy is required".to_string(),
            ));
        }
        if self.first_seed.checked_add(self.seeds).is_none() {
            return Err(ExperimentError::InvalidConfig(format!(
                "{} seeds starting at {} run past the largest seed",
                self.seeds, self.first_seed
            )));
        }
        self.limits()?;
        Ok(())
    }

    /// The resource caps of every search in the experiment.
    pub fn limits(&self) -> Result<SearchLimits, ExperimentError> {
        let limits = SearchLimits {
            max_expansions: self.max_expansions,
            time_limit: None,
        };
        match self.time_limit_secs {
            Some(secs) => limits
                .with_time_limit_secs(secs)
                .map_err(ExperimentError::InvalidConfig),
            None => Ok(limits),
        }
    }

    pub fn seeds(&self) -> Range<u64> {
        self.first_seed..self.first_seed.saturating_add(self.seeds)
    }
}

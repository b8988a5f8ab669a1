use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::centrality::PageRankOptions;
use crate::errors::{GroupingError, Result};

pub const DEFAULT_THRESHOLD: f64 = 0.1;
pub const DEFAULT_MIN_CLIQUE_SIZE: usize = 3;
pub const DEFAULT_DAMPING: f64 = 0.85;
pub const DEFAULT_TOLERANCE: f64 = 1e-6;
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Parameters of one grouping run.
///
/// Every field has a default, so a config file only needs to name the values
/// it changes:
///
/// ```toml
/// threshold = 0.25
/// min_clique_size = 4
/// ```
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GroupingConfig {
    /// Minimum overlap ratio for a pair of families to be linked.
    pub threshold: f64,
    /// Smallest sub-clique reported inside a non-complete component.
    pub min_clique_size: usize,
    pub damping: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
    /// Let edge weights bias the random walk used for ranking.
    pub weighted_centrality: bool,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        GroupingConfig {
            threshold: DEFAULT_THRESHOLD,
            min_clique_size: DEFAULT_MIN_CLIQUE_SIZE,
            damping: DEFAULT_DAMPING,
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            weighted_centrality: false,
        }
    }
}

impl GroupingConfig {
    pub fn validate(&self) -> Result<()> {
        check_threshold(self.threshold)?;
        if self.min_clique_size < 2 {
            return Err(GroupingError::InvalidConfig(format!(
                "min_clique_size must be at least 2, got {}",
                self.min_clique_size
            )));
        }
        if !(0.0..1.0).contains(&self.damping) {
            return Err(GroupingError::InvalidConfig(format!(
                "damping must be within [0, 1), got {}",
                self.damping
            )));
        }
        if self.tolerance.is_nan() || self.tolerance <= 0.0 {
            return Err(GroupingError::InvalidConfig(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(GroupingError::InvalidConfig(
                "max_iterations must be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn page_rank(&self) -> PageRankOptions {
        PageRankOptions {
            damping: self.damping,
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
            weighted: self.weighted_centrality,
        }
    }
}

pub(crate) fn check_threshold(threshold: f64) -> Result<()> {
    match (0.0..=1.0).contains(&threshold) {
        true => Ok(()),
        false => Err(GroupingError::InvalidThreshold(threshold)),
    }
}

impl TryFrom<&Path> for GroupingConfig {
    type Error = GroupingError;

    fn try_from(path: &Path) -> Result<Self> {
        let toml_str = read_to_string(path)?;
        let config: GroupingConfig = toml::from_str(&toml_str)?;
        config.validate()?;
        Ok(config)
    }
}

// Configuration type definitions

use serde::Deserialize;

use crate::stats::DEFAULT_THRESHOLD;

/// Default ordering applied to the repeated-words table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    None,
    Alpha,
    Frequency,
}

/// Output configuration section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub sort: SortOrder,
    #[serde(default)]
    pub strip_tags: bool,
}

/// Statistics configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct StatsConfig {
    #[serde(default = "default_threshold")]
    pub threshold: usize,
}

fn default_threshold() -> usize {
    DEFAULT_THRESHOLD
}

impl Default for StatsConfig {
    fn default() -> Self {
        StatsConfig {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub stats: StatsConfig,
}

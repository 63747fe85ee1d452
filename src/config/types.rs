// Configuration type definitions

use std::path::PathBuf;

use serde::Deserialize;

pub const DEFAULT_MIN_QUERY_LENGTH: usize = 3;
pub const DEFAULT_QUERY_DELAY_MS: u64 = 700;
pub const DEFAULT_MAX_RESULTS: usize = 50;

/// What to do with a fetch response whose query has since been superseded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StalePolicy {
    /// Drop responses older than the newest dispatched fetch
    #[default]
    Discard,
    /// Render every response as current, in arrival order
    Accept,
}

/// Autocomplete configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct AutocompleteConfig {
    #[serde(default = "default_min_query_length")]
    pub min_query_length: usize,
    #[serde(default = "default_query_delay_ms")]
    pub query_delay_ms: u64,
    /// Rows of suggestions shown before the panel scrolls (unset = unbounded)
    #[serde(default)]
    pub max_panel_height: Option<u16>,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default)]
    pub stale_responses: StalePolicy,
}

fn default_min_query_length() -> usize {
    DEFAULT_MIN_QUERY_LENGTH
}

fn default_query_delay_ms() -> u64 {
    DEFAULT_QUERY_DELAY_MS
}

fn default_max_results() -> usize {
    DEFAULT_MAX_RESULTS
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        AutocompleteConfig {
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
            query_delay_ms: DEFAULT_QUERY_DELAY_MS,
            max_panel_height: None,
            max_results: DEFAULT_MAX_RESULTS,
            stale_responses: StalePolicy::Discard,
        }
    }
}

/// Suggestion source section
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SourceConfig {
    /// Word list file; the built-in list is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

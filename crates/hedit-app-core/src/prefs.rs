// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Saved query preferences used by hedit tools.

use hedit_graph::Mode;
use serde::{Deserialize, Serialize};

use crate::config::{ConfigError, ConfigService, ConfigStore};

/// Config key the preferences are stored under.
pub const QUERY_PREFS_KEY: &str = "query_prefs";

/// Defaults applied to queries unless overridden per invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryPrefs {
    /// Mode the caller expects documents to satisfy when loading.
    pub required_mode: Mode,
    /// Leave nested tree-edges out of hypergraph listings.
    pub remove_subsumed: bool,
    /// Keep nodes without any connection out of the role partition.
    pub exclude_disconnected: bool,
    /// Drop adjacency rows without neighbours.
    pub omit_empty: bool,
}

impl Default for QueryPrefs {
    fn default() -> Self {
        Self {
            required_mode: Mode::T,
            remove_subsumed: true,
            exclude_disconnected: true,
            omit_empty: true,
        }
    }
}

impl QueryPrefs {
    /// Loads saved preferences, falling back to defaults when none exist.
    pub fn load<S: ConfigStore>(config: &ConfigService<S>) -> Result<Self, ConfigError> {
        Ok(config.load(QUERY_PREFS_KEY)?.unwrap_or_default())
    }

    /// Persists these preferences.
    pub fn save<S: ConfigStore>(&self, config: &ConfigService<S>) -> Result<(), ConfigError> {
        config.save(QUERY_PREFS_KEY, self)
    }
}

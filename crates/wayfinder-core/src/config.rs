//! Layered configuration.
//!
//! Sources, later ones overriding earlier ones:
//!
//! 1. Built-in defaults
//! 2. `wayfinder.toml` (optional, missing file is ignored)
//! 3. `WAYFINDER_`-prefixed environment variables, nested with `__`
//!    (for example `WAYFINDER_SEARCH__METHOD=a_star`)
//!
//! ```toml
//! [search]
//! method = "uniform_cost_search"
//! distance_metric = "manhattan"
//! bidirectional = true
//!
//! [logging]
//! level = "debug"
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::distance::DistanceMetric;
use crate::error::Result;
use crate::naming::DEFAULT_NODE_PREFIX;
use crate::search::{SearchMethod, SearchOptions};

/// Default configuration file name.
pub const CONFIG_FILE: &str = "wayfinder.toml";

/// Prefix of configuration environment variables.
pub const ENV_PREFIX: &str = "WAYFINDER_";

/// Request defaults applied by [`SearchRequest::with_config`](crate::SearchRequest::with_config).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Frontier discipline.
    pub method: SearchMethod,
    /// Metric used for edge cost and the A* heuristic.
    pub distance_metric: DistanceMetric,
    /// Prefix of generated node names.
    pub node_prefix_name: String,
    /// Annotate BFS/DFS paths with value cost.
    pub use_node_value: bool,
    /// Search from both ends.
    pub bidirectional: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            method: SearchMethod::default(),
            distance_metric: DistanceMetric::default(),
            node_prefix_name: DEFAULT_NODE_PREFIX.to_string(),
            use_node_value: false,
            bidirectional: false,
        }
    }
}

impl SearchConfig {
    /// Search switches carried by this configuration.
    #[must_use]
    pub fn options(&self) -> SearchOptions {
        SearchOptions {
            method: self.method,
            use_node_value: self.use_node_value,
            bidirectional: self.bidirectional,
        }
    }
}

/// Log verbosity for hosts that install a subscriber.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level of the `wayfinder_core` target (`error` .. `trace`).
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// `EnvFilter` directive restricting this crate's events to `level`.
    #[must_use]
    pub fn filter_directive(&self) -> String {
        format!("wayfinder_core={}", self.level.trim().to_ascii_lowercase())
    }
}

/// Complete configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WayfinderConfig {
    /// Request defaults.
    pub search: SearchConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl WayfinderConfig {
    /// Loads defaults, `wayfinder.toml` from the working directory, then the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a source holds a value of the wrong shape.
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Same as [`load`](Self::load) with an explicit file path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a source holds a value of the wrong shape.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config: Self = Self::figment(path.as_ref()).extract()?;
        tracing::debug!(
            method = %config.search.method,
            metric = %config.search.distance_metric,
            bidirectional = config.search.bidirectional,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Provider stack used by [`load_from`](Self::load_from).
    #[must_use]
    pub fn figment(path: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Parses a TOML document on top of the defaults, ignoring the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the document is malformed.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::string(toml))
            .extract()?)
    }
}

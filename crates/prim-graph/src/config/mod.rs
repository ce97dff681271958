//! Configuration types for graph loading, MST computation and logging.
//!
//! This module provides configuration structures for:
//! - Edge-list input handling (LoaderConfig)
//! - Prim's algorithm defaults (PrimConfig)
//! - Log output of the command-line front end (LoggingConfig)
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then `PRIM_GRAPH__*` environment variables.

mod loader;
mod logging;
mod prim;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

pub use self::loader::LoaderConfig;
pub use self::logging::LoggingConfig;
pub use self::prim::PrimConfig;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "PRIM_GRAPH";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GraphConfig {
    pub loader: LoaderConfig,
    pub prim: PrimConfig,
    pub logging: LoggingConfig,
}

impl GraphConfig {
    /// Load configuration from files and environment.
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. `config/default.toml` (optional)
    /// 2. `PRIM_GRAPH__<SECTION>__<KEY>` environment variables
    pub fn load() -> GraphResult<Self> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"));

        let config: GraphConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GraphError::InvalidConfig(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> GraphResult<Self> {
        let config: GraphConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate every section. Returns the first error encountered.
    pub fn validate(&self) -> GraphResult<()> {
        self.loader.validate()?;
        self.prim.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;

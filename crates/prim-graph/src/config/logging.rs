//! Logging configuration for the command-line front end.

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base level when no `-v` flag or `RUST_LOG` is given.
    pub level: String,
    /// Include the event target (module path) in each line.
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            with_target: true,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), GraphError> {
        let level = self.level.to_ascii_lowercase();
        if !LEVELS.contains(&level.as_str()) {
            return Err(GraphError::InvalidConfig(format!(
                "logging.level must be one of {:?} (got '{}')",
                LEVELS, self.level
            )));
        }
        Ok(())
    }
}

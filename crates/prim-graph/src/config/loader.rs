//! Configuration for reading edge-list input.

use serde::{Deserialize, Serialize};

use crate::error::GraphError;

/// Configuration for edge-list input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoaderConfig {
    /// Required input file extension, including the dot.
    /// Default: ".gl"
    pub file_extension: String,

    /// Skip blank lines instead of rejecting them.
    /// Default: true
    pub skip_blank_lines: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            file_extension: ".gl".to_string(),
            skip_blank_lines: true,
        }
    }
}

impl LoaderConfig {
    /// Validate the extension is a non-empty `.ext` suffix.
    pub fn validate(&self) -> Result<(), GraphError> {
        if !self.file_extension.starts_with('.') || self.file_extension.len() < 2 {
            return Err(GraphError::InvalidConfig(format!(
                "loader.file_extension must look like '.ext' (got '{}')",
                self.file_extension
            )));
        }
        Ok(())
    }
}

//! Executor configuration
//!
//! Configuration is loaded from YAML:
//!
//! ```yaml
//! policy: custom_preserving   # or: standard
//! mapper: prefix              # or: exact
//! initial_exit_status: EXECUTING
//! ```

pub mod trace;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::PolicyKind;

pub use trace::{StatusTrace, TraceOutcome};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error in {file}: {error}")]
    Yaml {
        file: String,
        error: serde_yaml::Error,
    },
}

/// How flow status names are turned into run statuses
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MapperKind {
    /// First run status whose name prefixes the flow status name
    #[default]
    Prefix,
    /// Flow status name must be a run status name
    Exact,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutorConfig {
    #[serde(default)]
    pub policy: PolicyKind,

    #[serde(default)]
    pub mapper: MapperKind,

    /// Seed for the job-level aggregate; `EXECUTING` when unset
    #[serde(default)]
    pub initial_exit_status: Option<String>,
}

impl ExecutorConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        load_yaml(path.as_ref())
    }
}

pub(crate) fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    serde_yaml::from_str(&content).map_err(|e| ConfigError::Yaml {
        file: path.display().to_string(),
        error: e,
    })
}

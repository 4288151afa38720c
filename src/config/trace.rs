//! Status trace files
//!
//! A trace is an executor configuration plus the sequence of outcomes a job
//! reported, replayed in order against a fresh job execution:
//!
//! ```yaml
//! policy: custom_preserving
//! job_name: import
//! execution_exit_status: MY_CUSTOM
//! events:
//!   - step: COMPLETED
//!   - flow: FAILED
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{load_yaml, ConfigError, ExecutorConfig};
use crate::engine::{FlowError, FlowExecutor, JobExecution, StatusEvent};
use crate::status::ExitStatus;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusTrace {
    #[serde(flatten)]
    pub executor: ExecutorConfig,

    #[serde(default = "default_job_name")]
    pub job_name: String,

    /// Exit code already on the job execution before the first event
    #[serde(default)]
    pub execution_exit_status: Option<String>,

    #[serde(default, with = "serde_yaml::with::singleton_map_recursive")]
    pub events: Vec<StatusEvent>,
}

fn default_job_name() -> String {
    "job".to_string()
}

/// Final state after replaying a trace
#[derive(Debug, Clone, Serialize)]
pub struct TraceOutcome {
    pub policy: String,
    pub aggregate: Option<ExitStatus>,
    pub execution: JobExecution,
}

impl StatusTrace {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        load_yaml(path.as_ref())
    }

    /// Fresh job execution seeded from the trace
    pub fn execution(&self) -> JobExecution {
        let execution = JobExecution::new(self.job_name.clone());
        match &self.execution_exit_status {
            Some(code) => execution.with_exit_status(ExitStatus::new(code.clone())),
            None => execution,
        }
    }

    /// Run every event through a new executor, then finish the execution
    pub fn replay(&self) -> Result<TraceOutcome, FlowError> {
        let mut executor = FlowExecutor::from_config(&self.executor);
        let mut execution = self.execution();

        execution.start();
        executor.replay(&self.events, &mut execution)?;
        execution.finish();

        Ok(TraceOutcome {
            policy: executor.policy().name().to_string(),
            aggregate: executor.exit_status().cloned(),
            execution,
        })
    }
}

//! Flow Executor - Propagates step and flow outcomes to the owning job
//!
//! The executor holds the job-level aggregate exit status and delegates every
//! propagation decision to a [`StatusPropagationPolicy`] chosen at construction:
//! 1. Step exit codes are folded into the aggregate (`add_exit_status`)
//! 2. Flow statuses update the job execution's run status, and its exit status
//!    when the policy allows (`update_job_execution_status`)

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::config::{ExecutorConfig, MapperKind};
use crate::engine::error::FlowError;
use crate::engine::execution::JobExecution;
use crate::engine::mapper::{ExactStatusMapper, PrefixStatusMapper, StatusMapper};
use crate::engine::policy::StatusPropagationPolicy;
use crate::status::{ExitStatus, FlowExecutionStatus};

/// An outcome reported while a job runs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusEvent {
    /// A step finished with this exit code
    Step(String),
    /// A flow finished with this status name
    Flow(String),
}

/// Generic flow executor, specialised by its propagation policy
pub struct FlowExecutor {
    policy: Box<dyn StatusPropagationPolicy>,
    mapper: Box<dyn StatusMapper>,
    exit_status: Option<ExitStatus>,
}

impl FlowExecutor {
    /// Create an executor with prefix status mapping and an `EXECUTING` aggregate
    pub fn new(policy: impl StatusPropagationPolicy + 'static) -> Self {
        Self::from_boxed(Box::new(policy))
    }

    fn from_boxed(policy: Box<dyn StatusPropagationPolicy>) -> Self {
        Self {
            policy,
            mapper: Box::new(PrefixStatusMapper),
            exit_status: Some(ExitStatus::EXECUTING),
        }
    }

    /// Build an executor from configuration
    pub fn from_config(config: &ExecutorConfig) -> Self {
        let executor = Self::from_boxed(config.policy.build());
        let executor = match config.mapper {
            MapperKind::Prefix => executor,
            MapperKind::Exact => executor.with_mapper(ExactStatusMapper),
        };

        match &config.initial_exit_status {
            Some(code) => executor.with_initial_exit_status(Some(ExitStatus::new(code.clone()))),
            None => executor,
        }
    }

    pub fn with_mapper(mut self, mapper: impl StatusMapper + 'static) -> Self {
        self.mapper = Box::new(mapper);
        self
    }

    /// Seed the aggregate. `None` means no job-level exit status yet.
    pub fn with_initial_exit_status(mut self, exit_status: Option<ExitStatus>) -> Self {
        self.exit_status = exit_status;
        self
    }

    pub fn policy(&self) -> &dyn StatusPropagationPolicy {
        self.policy.as_ref()
    }

    /// Current job-level aggregate
    pub fn exit_status(&self) -> Option<&ExitStatus> {
        self.exit_status.as_ref()
    }

    /// Fold a step exit code into the aggregate
    pub fn add_exit_status(&mut self, code: &str) {
        self.exit_status = self.policy.add_exit_status(self.exit_status.as_ref(), code);
    }

    /// Propagate a flow status to the job execution
    #[instrument(skip(self, execution), fields(policy = self.policy.name(), job = execution.job_name()))]
    pub fn update_job_execution_status(
        &mut self,
        execution: &mut JobExecution,
        status: &FlowExecutionStatus,
    ) -> Result<(), FlowError> {
        self.exit_status = self.policy.update_execution_status(
            self.exit_status.as_ref(),
            execution,
            status,
            self.mapper.as_ref(),
        )?;

        debug!(
            run_status = %execution.status(),
            exit_code = execution.exit_status().exit_code(),
            "Job execution status updated"
        );
        Ok(())
    }

    /// Apply one reported outcome
    pub fn apply(
        &mut self,
        event: &StatusEvent,
        execution: &mut JobExecution,
    ) -> Result<(), FlowError> {
        match event {
            StatusEvent::Step(code) => {
                self.add_exit_status(code);
                Ok(())
            }
            StatusEvent::Flow(name) => {
                self.update_job_execution_status(execution, &FlowExecutionStatus::new(name.as_str()))
            }
        }
    }

    /// Apply outcomes in order, stopping at the first error
    pub fn replay<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a StatusEvent>,
        execution: &mut JobExecution,
    ) -> Result<(), FlowError> {
        for event in events {
            self.apply(event, execution)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for FlowExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowExecutor")
            .field("policy", &self.policy.name())
            .field("exit_status", &self.exit_status)
            .finish()
    }
}

//! Status propagation policies
//!
//! A policy decides how step and flow outcomes fold into the job-level exit
//! status. Policies are stateless: the current aggregate goes in, the new
//! aggregate comes out.
//!
//! - `StandardPolicy` merges every outcome into the aggregate.
//! - `CustomStatusPreservingPolicy` keeps a custom job exit status from being
//!   overwritten by default ones, while still letting later outcomes qualify it.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::engine::error::FlowError;
use crate::engine::execution::JobExecution;
use crate::engine::mapper::StatusMapper;
use crate::status::{classify, is_non_default, CodeClass, ExitStatus, FlowExecutionStatus};

pub trait StatusPropagationPolicy: Send + Sync + fmt::Debug {
    fn name(&self) -> &'static str;

    /// Fold a step exit code into the aggregate
    fn add_exit_status(&self, aggregate: Option<&ExitStatus>, code: &str) -> Option<ExitStatus>;

    /// Propagate a flow status onto the job execution.
    ///
    /// The run status is always set from `mapper`. Returns the new aggregate.
    fn update_execution_status(
        &self,
        aggregate: Option<&ExitStatus>,
        execution: &mut JobExecution,
        status: &FlowExecutionStatus,
        mapper: &dyn StatusMapper,
    ) -> Result<Option<ExitStatus>, FlowError>;
}

/// Merge `code` into the aggregate. An absent aggregate yields the code alone.
fn merge(aggregate: Option<&ExitStatus>, code: &str) -> ExitStatus {
    let incoming = ExitStatus::new(code);
    match aggregate {
        Some(current) => current.and(&incoming),
        None => incoming,
    }
}

/// Always promotes step and flow outcomes to the job
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardPolicy;

impl StatusPropagationPolicy for StandardPolicy {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn add_exit_status(&self, aggregate: Option<&ExitStatus>, code: &str) -> Option<ExitStatus> {
        Some(merge(aggregate, code))
    }

    fn update_execution_status(
        &self,
        aggregate: Option<&ExitStatus>,
        execution: &mut JobExecution,
        status: &FlowExecutionStatus,
        mapper: &dyn StatusMapper,
    ) -> Result<Option<ExitStatus>, FlowError> {
        execution.set_status(mapper.find_batch_status(status)?);

        let merged = merge(aggregate, status.name());
        execution.set_exit_status(merged.clone());
        Ok(Some(merged))
    }
}

/// Does not promote a default exit status to the job once a custom one is in force
#[derive(Debug, Clone, Copy, Default)]
pub struct CustomStatusPreservingPolicy;

impl StatusPropagationPolicy for CustomStatusPreservingPolicy {
    fn name(&self) -> &'static str {
        "custom_preserving"
    }

    /// Merges only when an aggregate exists, it is custom and `code` is a
    /// default code. Every other combination leaves the aggregate as it was.
    fn add_exit_status(&self, aggregate: Option<&ExitStatus>, code: &str) -> Option<ExitStatus> {
        let Some(current_status) = aggregate else {
            debug!(code, "No job exit status yet, left unchanged");
            return None;
        };
        let current = classify(Some(current_status.exit_code()));
        let incoming = classify(Some(code));

        if current == CodeClass::NonDefault && incoming == CodeClass::Default {
            debug!(code, "Qualifying custom job exit status");
            Some(current_status.and(&ExitStatus::new(code)))
        } else {
            debug!(code, ?current, ?incoming, "Job exit status left unchanged");
            aggregate.cloned()
        }
    }

    fn update_execution_status(
        &self,
        aggregate: Option<&ExitStatus>,
        execution: &mut JobExecution,
        status: &FlowExecutionStatus,
        mapper: &dyn StatusMapper,
    ) -> Result<Option<ExitStatus>, FlowError> {
        execution.set_status(mapper.find_batch_status(status)?);

        if is_non_default(Some(execution.exit_status().exit_code())) {
            let merged = merge(aggregate, status.name());
            debug!(
                flow_status = status.name(),
                exit_code = merged.exit_code(),
                "Custom job exit status in force, merging flow status"
            );
            execution.set_exit_status(merged.clone());
            Ok(Some(merged))
        } else {
            Ok(aggregate.cloned())
        }
    }
}

/// Selects a policy at construction time
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyKind {
    Standard,
    #[default]
    CustomPreserving,
}

impl PolicyKind {
    pub fn build(self) -> Box<dyn StatusPropagationPolicy> {
        match self {
            PolicyKind::Standard => Box::new(StandardPolicy),
            PolicyKind::CustomPreserving => Box::new(CustomStatusPreservingPolicy),
        }
    }
}

//! Shared flow execution for sibling flows running in parallel
//!
//! Propagating a flow status is a read-modify-write of the job execution and
//! the executor's aggregate. Both sit behind one lock so concurrent flows of the
//! same job serialise their updates.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::engine::error::FlowError;
use crate::engine::execution::JobExecution;
use crate::engine::executor::{FlowExecutor, StatusEvent};
use crate::status::{ExitStatus, FlowExecutionStatus};

#[derive(Debug)]
struct FlowState {
    executor: FlowExecutor,
    execution: JobExecution,
}

#[derive(Debug, Clone)]
pub struct SharedFlowExecution {
    inner: Arc<Mutex<FlowState>>,
}

impl SharedFlowExecution {
    pub fn new(executor: FlowExecutor, execution: JobExecution) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FlowState {
                executor,
                execution,
            })),
        }
    }

    pub async fn add_exit_status(&self, code: &str) {
        let mut state = self.inner.lock().await;
        state.executor.add_exit_status(code);
    }

    pub async fn update_job_execution_status(
        &self,
        status: &FlowExecutionStatus,
    ) -> Result<(), FlowError> {
        let mut state = self.inner.lock().await;
        let FlowState {
            executor,
            execution,
        } = &mut *state;
        executor.update_job_execution_status(execution, status)
    }

    pub async fn apply(&self, event: &StatusEvent) -> Result<(), FlowError> {
        let mut state = self.inner.lock().await;
        let FlowState {
            executor,
            execution,
        } = &mut *state;
        executor.apply(event, execution)
    }

    /// Current job-level aggregate
    pub async fn exit_status(&self) -> Option<ExitStatus> {
        self.inner.lock().await.executor.exit_status().cloned()
    }

    /// Copy of the job execution as it stands
    pub async fn snapshot(&self) -> JobExecution {
        self.inner.lock().await.execution.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::policy::{CustomStatusPreservingPolicy, StandardPolicy};
    use crate::status::BatchStatus;

    #[tokio::test]
    async fn test_concurrent_flows_all_land() {
        let shared = SharedFlowExecution::new(
            FlowExecutor::new(StandardPolicy),
            JobExecution::new("parallel"),
        );

        let mut handles = Vec::new();
        for code in ["COMPLETED", "NOOP", "STOPPED", "COMPLETED", "NOOP"] {
            let shared = shared.clone();
            handles.push(tokio::spawn(async move {
                shared.add_exit_status(code).await;
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        // merge order does not change the most severe code
        assert_eq!(shared.exit_status().await, Some(ExitStatus::STOPPED));
    }

    #[tokio::test]
    async fn test_update_through_shared_handle() {
        let shared = SharedFlowExecution::new(
            FlowExecutor::new(CustomStatusPreservingPolicy)
                .with_initial_exit_status(Some(ExitStatus::new("MY_CUSTOM"))),
            JobExecution::new("parallel").with_exit_status(ExitStatus::new("MY_CUSTOM")),
        );

        shared
            .apply(&StatusEvent::Flow("COMPLETED".to_string()))
            .await
            .unwrap();

        let execution = shared.snapshot().await;
        assert_eq!(execution.status(), BatchStatus::Completed);
        assert_eq!(execution.exit_status().exit_code(), "MY_CUSTOM");
    }
}

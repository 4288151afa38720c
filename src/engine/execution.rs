//! Job execution record
//!
//! A `JobExecution` is owned by whoever orchestrates the job. Flow executors
//! only read and update the one they are handed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::status::{BatchStatus, ExitStatus};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobExecution {
    id: Uuid,
    job_name: String,
    status: BatchStatus,
    exit_status: ExitStatus,
    create_time: DateTime<Utc>,
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
}

impl JobExecution {
    /// Create a new execution in `STARTING` with an `UNKNOWN` exit status
    pub fn new(job_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            job_name: job_name.into(),
            status: BatchStatus::Starting,
            exit_status: ExitStatus::UNKNOWN,
            create_time: Utc::now(),
            start_time: None,
            end_time: None,
        }
    }

    /// Seed the exit status, e.g. with a custom code set by a listener
    pub fn with_exit_status(mut self, exit_status: ExitStatus) -> Self {
        self.exit_status = exit_status;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn job_name(&self) -> &str {
        &self.job_name
    }

    pub fn status(&self) -> BatchStatus {
        self.status
    }

    pub fn set_status(&mut self, status: BatchStatus) {
        self.status = status;
    }

    pub fn exit_status(&self) -> &ExitStatus {
        &self.exit_status
    }

    pub fn set_exit_status(&mut self, exit_status: ExitStatus) {
        self.exit_status = exit_status;
    }

    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<DateTime<Utc>> {
        self.end_time
    }

    /// Mark the execution as started
    pub fn start(&mut self) {
        self.start_time = Some(Utc::now());
        self.status = BatchStatus::Started;
    }

    /// Record the end time. The exit status is final from here on.
    pub fn finish(&mut self) {
        let end_time = Utc::now();
        self.end_time = Some(end_time);
        info!(
            job = %self.job_name,
            execution_id = %self.id,
            status = %self.status,
            exit_code = self.exit_status.exit_code(),
            "Job execution finished"
        );
    }

    pub fn is_running(&self) -> bool {
        self.start_time.is_some() && self.end_time.is_none()
    }
}

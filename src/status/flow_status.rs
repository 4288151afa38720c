//! Status reported by a flow or step to the job that owns it

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse kind of a flow status, derived from the prefix of its name.
/// Declared from lowest to highest priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Status {
    Completed,
    Stopped,
    Failed,
    Unknown,
}

impl Status {
    fn prefix(&self) -> &'static str {
        match self {
            Status::Completed => "COMPLETED",
            Status::Stopped => "STOPPED",
            Status::Failed => "FAILED",
            Status::Unknown => "UNKNOWN",
        }
    }

    /// Match a status name by prefix. Unrecognised names get the lowest priority.
    fn matching(name: &str) -> Status {
        [Status::Completed, Status::Stopped, Status::Failed, Status::Unknown]
            .into_iter()
            .find(|status| name.starts_with(status.prefix()))
            .unwrap_or(Status::Completed)
    }
}

/// Named outcome of a flow or step, e.g. `COMPLETED`, `FAILED` or a custom name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlowExecutionStatus {
    name: String,
}

impl FlowExecutionStatus {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn completed() -> Self {
        Self::new("COMPLETED")
    }

    pub fn stopped() -> Self {
        Self::new("STOPPED")
    }

    pub fn failed() -> Self {
        Self::new("FAILED")
    }

    pub fn unknown() -> Self {
        Self::new("UNKNOWN")
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn status(&self) -> Status {
        Status::matching(&self.name)
    }

    pub fn is_stop(&self) -> bool {
        self.name.starts_with(Status::Stopped.prefix())
    }

    pub fn is_fail(&self) -> bool {
        self.name.starts_with(Status::Failed.prefix())
    }

    pub fn is_complete(&self) -> bool {
        self.name.starts_with(Status::Completed.prefix())
    }

    /// True when the flow has reached a terminal state
    pub fn is_end(&self) -> bool {
        self.is_stop() || self.is_fail() || self.is_complete()
    }
}

impl PartialOrd for FlowExecutionStatus {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FlowExecutionStatus {
    fn cmp(&self, other: &Self) -> Ordering {
        self.status()
            .cmp(&other.status())
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl fmt::Display for FlowExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for FlowExecutionStatus {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

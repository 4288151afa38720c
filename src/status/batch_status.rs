//! Run status of a job or step execution

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Lifecycle state of an execution. Drives control flow, unlike [`ExitStatus`]
/// which is only a reporting label.
///
/// Declaration order matters: status mapping picks the first variant whose
/// name prefixes a flow status name.
///
/// [`ExitStatus`]: crate::status::ExitStatus
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BatchStatus {
    Completed,
    #[default]
    Starting,
    /// Executing
    Started,
    Stopping,
    Stopped,
    Failed,
    Abandoned,
    Unknown,
}

impl BatchStatus {
    /// All variants in declaration order
    pub const ALL: [BatchStatus; 8] = [
        BatchStatus::Completed,
        BatchStatus::Starting,
        BatchStatus::Started,
        BatchStatus::Stopping,
        BatchStatus::Stopped,
        BatchStatus::Failed,
        BatchStatus::Abandoned,
        BatchStatus::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BatchStatus::Completed => "COMPLETED",
            BatchStatus::Starting => "STARTING",
            BatchStatus::Started => "STARTED",
            BatchStatus::Stopping => "STOPPING",
            BatchStatus::Stopped => "STOPPED",
            BatchStatus::Failed => "FAILED",
            BatchStatus::Abandoned => "ABANDONED",
            BatchStatus::Unknown => "UNKNOWN",
        }
    }

    /// Lifecycle rank, later or more severe states rank higher
    fn rank(&self) -> u8 {
        match self {
            BatchStatus::Completed => 0,
            BatchStatus::Starting => 1,
            BatchStatus::Started => 2,
            BatchStatus::Stopping => 3,
            BatchStatus::Stopped => 4,
            BatchStatus::Failed => 5,
            BatchStatus::Abandoned => 6,
            BatchStatus::Unknown => 7,
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self, BatchStatus::Starting | BatchStatus::Started)
    }

    pub fn is_unsuccessful(&self) -> bool {
        self.rank() >= BatchStatus::Failed.rank()
    }
}

impl fmt::Display for BatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Unknown batch status: {0}")]
pub struct ParseBatchStatusError(pub String);

impl FromStr for BatchStatus {
    type Err = ParseBatchStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BatchStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseBatchStatusError(s.to_string()))
    }
}

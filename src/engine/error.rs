//! Flow executor error types

use crate::status::ParseBatchStatusError;

/// Errors that can occur while propagating a flow status to its job
#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("Unmapped flow status '{status}': {source}")]
    UnmappedStatus {
        status: String,
        #[source]
        source: ParseBatchStatusError,
    },

    #[error("Status mapping failed for '{status}': {reason}")]
    StatusMapping { status: String, reason: String },
}

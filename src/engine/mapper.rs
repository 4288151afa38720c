//! Mapping from flow status names to run statuses

use crate::engine::error::FlowError;
use crate::status::{BatchStatus, FlowExecutionStatus};

/// Translates the status a flow reports into the run status of its job
pub trait StatusMapper: Send + Sync {
    fn find_batch_status(&self, status: &FlowExecutionStatus) -> Result<BatchStatus, FlowError>;
}

/// Picks the first run status (in declaration order) whose name prefixes the
/// flow status name, so `FAILED.step2` maps to `FAILED`. Unmatched names map to
/// `UNKNOWN`. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixStatusMapper;

impl StatusMapper for PrefixStatusMapper {
    fn find_batch_status(&self, status: &FlowExecutionStatus) -> Result<BatchStatus, FlowError> {
        Ok(BatchStatus::ALL
            .into_iter()
            .find(|batch_status| status.name().starts_with(batch_status.as_str()))
            .unwrap_or(BatchStatus::Unknown))
    }
}

/// Requires the flow status name to be exactly a run status name
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactStatusMapper;

impl StatusMapper for ExactStatusMapper {
    fn find_batch_status(&self, status: &FlowExecutionStatus) -> Result<BatchStatus, FlowError> {
        status
            .name()
            .parse::<BatchStatus>()
            .map_err(|source| FlowError::UnmappedStatus {
                status: status.name().to_string(),
                source,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(name: &str) -> BatchStatus {
        PrefixStatusMapper
            .find_batch_status(&FlowExecutionStatus::new(name))
            .unwrap()
    }

    #[test]
    fn test_prefix_mapping() {
        assert_eq!(prefix("COMPLETED"), BatchStatus::Completed);
        assert_eq!(prefix("FAILED.step2"), BatchStatus::Failed);
        assert_eq!(prefix("STOPPED"), BatchStatus::Stopped);
        assert_eq!(prefix("ABANDONED"), BatchStatus::Abandoned);
    }

    #[test]
    fn test_prefix_mapping_falls_back_to_unknown() {
        assert_eq!(prefix("MY_CUSTOM"), BatchStatus::Unknown);
        assert_eq!(prefix(""), BatchStatus::Unknown);
    }

    #[test]
    fn test_exact_mapping() {
        let status = ExactStatusMapper
            .find_batch_status(&FlowExecutionStatus::stopped())
            .unwrap();
        assert_eq!(status, BatchStatus::Stopped);

        let err = ExactStatusMapper
            .find_batch_status(&FlowExecutionStatus::new("FAILED.step2"))
            .unwrap_err();
        assert!(matches!(err, FlowError::UnmappedStatus { ref status, .. } if status == "FAILED.step2"));
    }
}

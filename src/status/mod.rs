//! Status value types
//!
//! This module contains:
//! - `exit_status` - The reporting label of a job or step and its merge operator
//! - `batch_status` - The run status that drives control flow
//! - `flow_status` - The status a flow or step reports back to its job
//! - `classify` - Default versus custom exit code classification

pub mod batch_status;
pub mod classify;
pub mod exit_status;
pub mod flow_status;

pub use batch_status::{BatchStatus, ParseBatchStatusError};
pub use classify::{classify, is_non_default, CodeClass, DEFAULT_EXIT_CODES};
pub use exit_status::ExitStatus;
pub use flow_status::{FlowExecutionStatus, Status};

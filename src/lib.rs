//! # Flow Status
//!
//! Exit-status aggregation for layered batch execution (job → flow → step).
//!
//! ## Features
//!
//! - **Exit status values** - Codes plus descriptions with a severity-ordered merge
//! - **Pluggable propagation** - Choose how step and flow outcomes reach the job
//! - **Custom status preservation** - Keep a user-assigned job exit code from being
//!   overwritten by framework defaults
//! - **Replayable traces** - Feed a YAML sequence of outcomes through an executor
//!
//! ## Policies
//!
//! - **Standard**: every step and flow outcome is merged into the job exit status
//! - **Custom preserving** (default): once a custom job exit code is in force, only
//!   default codes may further qualify it
//!
//! ## Quick Start
//!
//! ```rust
//! use flow_status::{
//!     CustomStatusPreservingPolicy, ExitStatus, FlowExecutionStatus, FlowExecutor, JobExecution,
//! };
//!
//! let mut executor = FlowExecutor::new(CustomStatusPreservingPolicy)
//!     .with_initial_exit_status(Some(ExitStatus::new("MY_CUSTOM")));
//! let mut execution = JobExecution::new("import").with_exit_status(ExitStatus::new("MY_CUSTOM"));
//!
//! executor.add_exit_status("COMPLETED");
//! executor
//!     .update_job_execution_status(&mut execution, &FlowExecutionStatus::completed())
//!     .unwrap();
//!
//! assert_eq!(execution.exit_status().exit_code(), "MY_CUSTOM");
//! ```

pub mod config;
pub mod engine;
pub mod status;

// Re-export main types
pub use config::{ConfigError, ExecutorConfig, MapperKind, StatusTrace, TraceOutcome};
pub use engine::{
    CustomStatusPreservingPolicy, ExactStatusMapper, FlowError, FlowExecutor, JobExecution,
    PolicyKind, PrefixStatusMapper, SharedFlowExecution, StandardPolicy, StatusEvent,
    StatusMapper, StatusPropagationPolicy,
};
pub use status::{
    classify, is_non_default, BatchStatus, CodeClass, ExitStatus, FlowExecutionStatus,
    DEFAULT_EXIT_CODES,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{ExecutorConfig, StatusTrace};
    pub use crate::engine::{
        CustomStatusPreservingPolicy, FlowError, FlowExecutor, JobExecution, PolicyKind,
        StandardPolicy, StatusEvent, StatusPropagationPolicy,
    };
    pub use crate::status::{classify, BatchStatus, CodeClass, ExitStatus, FlowExecutionStatus};
}

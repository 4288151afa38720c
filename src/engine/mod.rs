//! Flow execution engine module
//!
//! This module contains:
//! - `executor` - The generic flow executor
//! - `policy` - Status propagation policies
//! - `mapper` - Flow status to run status mapping
//! - `execution` - The job execution record
//! - `shared` - Lock-guarded execution for parallel sibling flows
//! - `error` - Flow error types

pub mod error;
pub mod execution;
pub mod executor;
pub mod mapper;
pub mod policy;
pub mod shared;

pub use error::FlowError;
pub use execution::JobExecution;
pub use executor::{FlowExecutor, StatusEvent};
pub use mapper::{ExactStatusMapper, PrefixStatusMapper, StatusMapper};
pub use policy::{
    CustomStatusPreservingPolicy, PolicyKind, StandardPolicy, StatusPropagationPolicy,
};
pub use shared::SharedFlowExecution;

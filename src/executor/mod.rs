//! Query Executor subsystem for gridquery
//!
//! The executor consumes intents and produces deterministic results.
//!
//! # Execution by intent kind
//!
//! - Aggregate: count rows per group, report the leader, return every feature
//! - Filter: keep features matching all enforced conditions, sum their length
//! - Unrecognized: clarification text and an empty feature collection
//!
//! # Invariants
//!
//! - The dataset is never mutated
//! - Same intent + same dataset = same result
//! - Missing fields never raise; they fail the condition that reads them

mod aggregate;
mod errors;
mod executor;
mod filters;
mod result;

pub use aggregate::{GroupCount, GroupCounter};
pub use errors::{ExecutorError, ExecutorErrorCode, ExecutorResult, Severity};
pub use executor::{QueryExecutor, CLARIFICATION_TEXT};
pub use filters::ConditionFilter;
pub use result::{group_thousands, ExecutionStats, FeatureCollection, QueryResult};

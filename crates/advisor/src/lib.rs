//! `stocktrack-advisor`
//!
//! **Responsibility:** advisory jobs layered on top of the inventory evaluator.
//!
//! Jobs read a record snapshot and emit **insights**; they never touch the
//! records they were given.

pub mod job;
pub mod restock;
pub mod result;

pub use job::AdvisorJob;
pub use restock::{RestockAdvisorJob, SuggestionPayload};
pub use result::{AdvisorError, Insight};

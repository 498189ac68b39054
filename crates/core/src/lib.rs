//! `stocktrack-core` — shared building blocks for the inventory workspace.
//!
//! This crate contains **pure domain** primitives (no IO, no rendering).

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;

//! Validation engine module.
//!
//! Provides ordered check execution and result aggregation.

pub mod orchestrator;
pub mod result;

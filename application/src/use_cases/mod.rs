//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod judge_equivalence;
pub mod run_consensus;
pub(crate) mod shared;

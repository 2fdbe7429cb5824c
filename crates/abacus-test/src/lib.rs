//! ABACUS Test Harness - cross-crate scenario validation
//!
//! This crate provides:
//! - Random operand generation across bases
//! - Reference-checked arithmetic sweeps (decimal operands validated
//!   against native integer arithmetic)
//! - Textual round-trip sweeps across every supported base

pub mod harness;

pub use harness::*;

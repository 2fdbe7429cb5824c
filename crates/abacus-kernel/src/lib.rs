//! ABACUS Kernel - arithmetic algorithms and dispatch
//!
//! The algorithms live in plain functions (digit level, chain level,
//! number level); the operation registry maps stable identifiers to
//! them; the [`ArithmeticEngine`] is the composition root that wires a
//! numeral system, the notations, and a fully populated registry
//! together before any arithmetic can run.

pub mod chain_ops;
pub mod digit_ops;
pub mod engine;
pub mod number_ops;
pub mod registry;

pub use chain_ops::*;
pub use digit_ops::*;
pub use engine::*;
pub use number_ops::*;
pub use registry::*;

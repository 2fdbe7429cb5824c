//! ABACUS Chain - Digit chains and the number representation
//!
//! A number's magnitude is an explicit digit sequence anchored at the
//! units position. The chain here is a flat, center-indexed buffer:
//! traversal is index arithmetic, cloning is a flat copy, and the
//! infinity sentinel is a tagged variant rather than a missing node.

pub mod chain;
pub mod number;

pub use chain::*;
pub use number::*;

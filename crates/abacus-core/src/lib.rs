//! ABACUS Core - Fundamental types for radix arithmetic
//!
//! This crate defines the types used throughout the ABACUS kernel:
//! - Signs and their logical combinators
//! - Digits and per-base numeral systems (bases 2 through 65)
//! - Operation identifiers and classifiers
//! - Error types

pub mod digit;
pub mod error;
pub mod op;
pub mod sign;
pub mod system;

pub use digit::*;
pub use error::*;
pub use op::*;
pub use sign::*;
pub use system::*;

//! ABACUS Pool - concurrent calculation fan-out
//!
//! Runs N independent calculations on N OS threads and collects their
//! results in input order. The join is hard: every worker is waited for
//! before any fault surfaces, and fault selection is deterministic by
//! input position, never by wall-clock completion order.
//!
//! The pool is generic and knows nothing about numbers; the kernel and
//! higher layers feed it whatever work they want fanned out.

pub mod calculation;
pub mod pool;

pub use calculation::*;
pub use pool::*;

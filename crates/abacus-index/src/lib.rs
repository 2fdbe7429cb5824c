//! ABACUS Index - memoized positive integers for component addressing
//!
//! Higher layers address their components 1-based (vector slots, matrix
//! rows). The repository hands out those indexes as cached, shared
//! number instances: the same request always returns the same
//! allocation, and the backing sequences only ever grow.

pub mod repository;

pub use repository::*;

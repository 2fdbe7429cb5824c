//! ABACUS Notation - textual number notations
//!
//! Two notations per base:
//! - *standard*: optional sign, integer digits, optional `.` + fraction
//! - *scientific*: optional sign, one leading digit, `.`, mantissa,
//!   exponent marker `e`/`E`, signed exponent
//!
//! Parsing tries scientific first, then standard; formatting emits
//! standard notation. Text is the kernel's only serialization surface.

pub mod format;
pub mod notations;

pub use format::*;
pub use notations::*;

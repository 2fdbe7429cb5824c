//! Error types for the ABACUS kernel

use thiserror::Error;

use crate::OperationId;

/// Core ABACUS errors
#[derive(Error, Debug)]
pub enum AbacusError {
    // Argument errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Two operands of differing bases handed to a binary operation.
    /// There is no implicit coercion anywhere in the kernel.
    #[error("Base mismatch: {left} vs {right}")]
    BaseMismatch { left: u8, right: u8 },

    /// Individually valid inputs that combine into a mathematically
    /// undefined result (e.g. opposite-signed infinities added).
    #[error("Undefined operation: {0}")]
    UndefinedOperation(String),

    // Registry errors
    #[error("Operation already registered: {0}")]
    OperationExists(OperationId),

    #[error("Operation not registered: {0}")]
    OperationDoesNotExist(OperationId),

    /// No accepted textual notation matched. Every notation-specific
    /// failure is retained as detail.
    #[error("Cannot parse {input:?} as a base-{base} number: {}", .causes.join("; "))]
    NumberParsing {
        base: u8,
        input: String,
        causes: Vec<String>,
    },
}

/// Result type for ABACUS operations
pub type AbacusResult<T> = Result<T, AbacusError>;

impl AbacusError {
    /// Shorthand for the base check every binary entry point runs first.
    pub fn check_bases(left: u8, right: u8) -> AbacusResult<()> {
        if left == right {
            Ok(())
        } else {
            Err(AbacusError::BaseMismatch { left, right })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_bases() {
        assert!(AbacusError::check_bases(10, 10).is_ok());
        let err = AbacusError::check_bases(10, 16).unwrap_err();
        assert!(matches!(
            err,
            AbacusError::BaseMismatch {
                left: 10,
                right: 16
            }
        ));
    }

    #[test]
    fn test_parsing_error_keeps_causes() {
        let err = AbacusError::NumberParsing {
            base: 10,
            input: "1..2".into(),
            causes: vec!["not scientific".into(), "not standard".into()],
        };
        let text = err.to_string();
        assert!(text.contains("not scientific"));
        assert!(text.contains("not standard"));
    }
}

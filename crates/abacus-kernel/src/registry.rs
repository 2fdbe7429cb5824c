//! Operation registry
//!
//! A dispatch table from stable operation identifiers to algorithm
//! implementations. Registration is one-shot: rebinding an identifier
//! is an error, not an override. The table lives behind a single lock;
//! after start-up population it is read-mostly.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use abacus_chain::Number;
use abacus_core::{AbacusError, AbacusResult, Digit, OperationId};

/// A registered algorithm, one variant per operation shape
#[derive(Clone)]
pub enum Algorithm {
    /// (number, number) -> number
    NumberBinary(Arc<dyn Fn(&Number, &Number) -> AbacusResult<Number> + Send + Sync>),
    /// number -> number
    NumberUnary(Arc<dyn Fn(&Number) -> AbacusResult<Number> + Send + Sync>),
    /// (number, positions) -> number
    NumberShift(Arc<dyn Fn(&Number, usize) -> AbacusResult<Number> + Send + Sync>),
    /// (number, number) -> ordering
    NumberCompare(Arc<dyn Fn(&Number, &Number) -> AbacusResult<Ordering> + Send + Sync>),
    /// (digit, digit) -> (digit, carry)
    DigitAdd(Arc<dyn Fn(Digit, Digit) -> AbacusResult<(Digit, bool)> + Send + Sync>),
    /// digit -> digit
    DigitUnary(Arc<dyn Fn(Digit) -> AbacusResult<Digit> + Send + Sync>),
    /// (digit, digit) -> ordering
    DigitCompare(Arc<dyn Fn(Digit, Digit) -> AbacusResult<Ordering> + Send + Sync>),
    /// (base, text) -> number
    Parse(Arc<dyn Fn(u8, &str) -> AbacusResult<Number> + Send + Sync>),
    /// number -> text
    Format(Arc<dyn Fn(&Number) -> AbacusResult<String> + Send + Sync>),
}

impl std::fmt::Debug for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let shape = match self {
            Algorithm::NumberBinary(_) => "NumberBinary",
            Algorithm::NumberUnary(_) => "NumberUnary",
            Algorithm::NumberShift(_) => "NumberShift",
            Algorithm::NumberCompare(_) => "NumberCompare",
            Algorithm::DigitAdd(_) => "DigitAdd",
            Algorithm::DigitUnary(_) => "DigitUnary",
            Algorithm::DigitCompare(_) => "DigitCompare",
            Algorithm::Parse(_) => "Parse",
            Algorithm::Format(_) => "Format",
        };
        write!(f, "Algorithm::{}", shape)
    }
}

/// Identifier -> algorithm table
pub struct OperationRegistry {
    table: Mutex<HashMap<OperationId, Algorithm>>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        OperationRegistry {
            table: Mutex::new(HashMap::new()),
        }
    }

    /// Bind an identifier to an algorithm. One-shot: an already-bound
    /// identifier fails with `OperationExists`.
    pub fn register(&self, id: OperationId, algorithm: Algorithm) -> AbacusResult<()> {
        let mut table = self.table.lock();
        if table.contains_key(&id) {
            return Err(AbacusError::OperationExists(id));
        }
        table.insert(id, algorithm);
        Ok(())
    }

    /// The algorithm bound to an identifier
    pub fn lookup(&self, id: OperationId) -> AbacusResult<Algorithm> {
        self.table
            .lock()
            .get(&id)
            .cloned()
            .ok_or(AbacusError::OperationDoesNotExist(id))
    }

    /// Unbind an identifier, returning its algorithm
    pub fn remove(&self, id: OperationId) -> AbacusResult<Algorithm> {
        self.table
            .lock()
            .remove(&id)
            .ok_or(AbacusError::OperationDoesNotExist(id))
    }

    pub fn contains(&self, id: OperationId) -> bool {
        self.table.lock().contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.table.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.lock().is_empty()
    }
}

impl Default for OperationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use abacus_core::{ops, OperationClass};

    fn noop() -> Algorithm {
        Algorithm::NumberUnary(Arc::new(|n: &Number| Ok(n.clone())))
    }

    #[test]
    fn test_register_is_one_shot() {
        let registry = OperationRegistry::new();
        registry.register(ops::NUMBER_NEGATE, noop()).unwrap();
        let err = registry.register(ops::NUMBER_NEGATE, noop()).unwrap_err();
        assert!(matches!(err, AbacusError::OperationExists(id) if id == ops::NUMBER_NEGATE));
    }

    #[test]
    fn test_lookup_unbound_fails() {
        let registry = OperationRegistry::new();
        assert!(matches!(
            registry.lookup(ops::NUMBER_ADD),
            Err(AbacusError::OperationDoesNotExist(_))
        ));
    }

    #[test]
    fn test_remove_then_lookup_fails() {
        let registry = OperationRegistry::new();
        registry.register(ops::NUMBER_NEGATE, noop()).unwrap();
        registry.remove(ops::NUMBER_NEGATE).unwrap();
        assert!(matches!(
            registry.lookup(ops::NUMBER_NEGATE),
            Err(AbacusError::OperationDoesNotExist(_))
        ));
        // and removal itself is no longer possible either
        assert!(registry.remove(ops::NUMBER_NEGATE).is_err());
    }

    #[test]
    fn test_custom_identifier_registration() {
        let registry = OperationRegistry::new();
        let custom = OperationId::new("number.triple", OperationClass::Multiplication);
        registry.register(custom, noop()).unwrap();
        assert!(registry.contains(custom));
        assert_eq!(registry.len(), 1);
    }
}

//! Operation identifiers
//!
//! Every algorithm in the kernel is addressed by a stable identifier, so
//! call sites never name an implementation directly. The identifiers for
//! the built-in set live in [`ops`]; extensions mint their own.

use std::fmt;

/// Coarse grouping of operations, carried for diagnostics only
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum OperationClass {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    #[default]
    None,
}

/// Stable key naming one registered algorithm
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperationId {
    name: &'static str,
    class: OperationClass,
}

impl OperationId {
    pub const fn new(name: &'static str, class: OperationClass) -> Self {
        OperationId { name, class }
    }

    #[inline]
    pub fn name(self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn class(self) -> OperationClass {
        self.class
    }
}

impl fmt::Debug for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Op({}, {:?})", self.name, self.class)
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The well-known identifiers of the built-in operation set
pub mod ops {
    use super::{OperationClass, OperationId};

    pub const NUMBER_ADD: OperationId =
        OperationId::new("number.add", OperationClass::Addition);
    pub const NUMBER_SUBTRACT: OperationId =
        OperationId::new("number.subtract", OperationClass::Subtraction);
    pub const NUMBER_MULTIPLY: OperationId =
        OperationId::new("number.multiply", OperationClass::Multiplication);
    pub const NUMBER_COMPARE: OperationId =
        OperationId::new("number.compare", OperationClass::None);
    pub const NUMBER_NEGATE: OperationId =
        OperationId::new("number.negate", OperationClass::None);
    pub const NUMBER_COMPLEMENT: OperationId =
        OperationId::new("number.complement", OperationClass::None);
    pub const NUMBER_TRUNCATE: OperationId =
        OperationId::new("number.truncate", OperationClass::None);
    pub const NUMBER_SHIFT_LEFT: OperationId =
        OperationId::new("number.shift-left", OperationClass::Multiplication);
    pub const NUMBER_SHIFT_RIGHT: OperationId =
        OperationId::new("number.shift-right", OperationClass::Division);

    pub const DIGIT_ADD: OperationId =
        OperationId::new("digit.add", OperationClass::Addition);
    pub const DIGIT_COMPLEMENT: OperationId =
        OperationId::new("digit.complement", OperationClass::Subtraction);
    pub const DIGIT_COMPARE: OperationId =
        OperationId::new("digit.compare", OperationClass::None);

    pub const NUMBER_PARSE: OperationId =
        OperationId::new("number.parse", OperationClass::None);
    pub const NUMBER_FORMAT: OperationId =
        OperationId::new("number.format", OperationClass::None);

    /// Every built-in identifier, in registration order
    pub const ALL: [OperationId; 14] = [
        NUMBER_ADD,
        NUMBER_SUBTRACT,
        NUMBER_MULTIPLY,
        NUMBER_COMPARE,
        NUMBER_NEGATE,
        NUMBER_COMPLEMENT,
        NUMBER_TRUNCATE,
        NUMBER_SHIFT_LEFT,
        NUMBER_SHIFT_RIGHT,
        DIGIT_ADD,
        DIGIT_COMPLEMENT,
        DIGIT_COMPARE,
        NUMBER_PARSE,
        NUMBER_FORMAT,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_ids_are_distinct() {
        let names: HashSet<&str> = ops::ALL.iter().map(|id| id.name()).collect();
        assert_eq!(names.len(), ops::ALL.len());
    }

    #[test]
    fn test_classifier_grouping() {
        assert_eq!(ops::NUMBER_ADD.class(), OperationClass::Addition);
        assert_eq!(ops::NUMBER_SHIFT_RIGHT.class(), OperationClass::Division);
        assert_eq!(ops::NUMBER_COMPARE.class(), OperationClass::None);
    }

    #[test]
    fn test_identity_is_by_name_and_class() {
        let custom = OperationId::new("number.add", OperationClass::Addition);
        assert_eq!(custom, ops::NUMBER_ADD);
    }
}

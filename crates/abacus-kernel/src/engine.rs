//! The arithmetic engine
//!
//! Composition root for the kernel: one numeral system, one notation
//! table, one operation registry, wired together at construction. The
//! registry is populated exhaustively with the built-in set before the
//! engine is handed out, so every operator method can dispatch by
//! identifier. Swapping an algorithm means removing the binding and
//! registering another; the call sites never change.

use std::cmp::Ordering;
use std::sync::Arc;

use abacus_chain::Number;
use abacus_core::{
    ops, AbacusError, AbacusResult, Digit, NumeralSystem, OperationId,
};
use abacus_notation::{format as format_notation, Notations};

use crate::{digit_ops, number_ops, Algorithm, OperationRegistry};

/// Engine tuning knobs
#[derive(Clone, Copy, Debug, Default)]
pub struct EngineConfig {
    /// Fan multiplication partial products out through the calculation
    /// pool. Off by default; results are identical either way.
    pub concurrent_multiplication: bool,
}

/// The kernel's composition root
pub struct ArithmeticEngine {
    system: Arc<NumeralSystem>,
    registry: OperationRegistry,
    config: EngineConfig,
}

impl ArithmeticEngine {
    pub fn new() -> AbacusResult<Self> {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> AbacusResult<Self> {
        let system = Arc::new(NumeralSystem::new());
        let notations = Arc::new(Notations::new(&system)?);
        let registry = OperationRegistry::new();

        register_builtins(&registry, &system, &notations, config)?;
        tracing::debug!(
            operations = registry.len(),
            "registered built-in operation set"
        );

        Ok(ArithmeticEngine {
            system,
            registry,
            config,
        })
    }

    #[inline]
    pub fn system(&self) -> &NumeralSystem {
        &self.system
    }

    /// The registry, for extension by identifier
    #[inline]
    pub fn registry(&self) -> &OperationRegistry {
        &self.registry
    }

    #[inline]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    // ---- dispatch helpers ----------------------------------------------

    fn shape_error(id: OperationId, algorithm: &Algorithm) -> AbacusError {
        AbacusError::InvalidArgument(format!(
            "operation {} is bound to a mismatched shape {:?}",
            id, algorithm
        ))
    }

    fn number_binary(
        &self,
        id: OperationId,
        a: &Number,
        b: &Number,
    ) -> AbacusResult<Number> {
        match self.registry.lookup(id)? {
            Algorithm::NumberBinary(run) => run(a, b),
            other => Err(Self::shape_error(id, &other)),
        }
    }

    fn number_unary(&self, id: OperationId, n: &Number) -> AbacusResult<Number> {
        match self.registry.lookup(id)? {
            Algorithm::NumberUnary(run) => run(n),
            other => Err(Self::shape_error(id, &other)),
        }
    }

    // ---- the public operator surface -----------------------------------

    /// Parse text as a number of the given base
    pub fn number(&self, base: u8, text: &str) -> AbacusResult<Number> {
        match self.registry.lookup(ops::NUMBER_PARSE)? {
            Algorithm::Parse(run) => run(base, text),
            other => Err(Self::shape_error(ops::NUMBER_PARSE, &other)),
        }
    }

    /// Render a number in standard notation
    pub fn format(&self, n: &Number) -> AbacusResult<String> {
        match self.registry.lookup(ops::NUMBER_FORMAT)? {
            Algorithm::Format(run) => run(n),
            other => Err(Self::shape_error(ops::NUMBER_FORMAT, &other)),
        }
    }

    pub fn add(&self, a: &Number, b: &Number) -> AbacusResult<Number> {
        self.number_binary(ops::NUMBER_ADD, a, b)
    }

    pub fn subtract(&self, minuend: &Number, subtrahend: &Number) -> AbacusResult<Number> {
        self.number_binary(ops::NUMBER_SUBTRACT, minuend, subtrahend)
    }

    pub fn multiply(&self, a: &Number, b: &Number) -> AbacusResult<Number> {
        self.number_binary(ops::NUMBER_MULTIPLY, a, b)
    }

    pub fn compare(&self, a: &Number, b: &Number) -> AbacusResult<Ordering> {
        match self.registry.lookup(ops::NUMBER_COMPARE)? {
            Algorithm::NumberCompare(run) => run(a, b),
            other => Err(Self::shape_error(ops::NUMBER_COMPARE, &other)),
        }
    }

    pub fn negate(&self, n: &Number) -> AbacusResult<Number> {
        self.number_unary(ops::NUMBER_NEGATE, n)
    }

    pub fn complement(&self, n: &Number) -> AbacusResult<Number> {
        self.number_unary(ops::NUMBER_COMPLEMENT, n)
    }

    pub fn truncate(&self, n: &Number) -> AbacusResult<Number> {
        self.number_unary(ops::NUMBER_TRUNCATE, n)
    }

    pub fn shift_left(&self, n: &Number, positions: usize) -> AbacusResult<Number> {
        match self.registry.lookup(ops::NUMBER_SHIFT_LEFT)? {
            Algorithm::NumberShift(run) => run(n, positions),
            other => Err(Self::shape_error(ops::NUMBER_SHIFT_LEFT, &other)),
        }
    }

    pub fn shift_right(&self, n: &Number, positions: usize) -> AbacusResult<Number> {
        match self.registry.lookup(ops::NUMBER_SHIFT_RIGHT)? {
            Algorithm::NumberShift(run) => run(n, positions),
            other => Err(Self::shape_error(ops::NUMBER_SHIFT_RIGHT, &other)),
        }
    }

    pub fn digit_add(&self, d1: Digit, d2: Digit) -> AbacusResult<(Digit, bool)> {
        match self.registry.lookup(ops::DIGIT_ADD)? {
            Algorithm::DigitAdd(run) => run(d1, d2),
            other => Err(Self::shape_error(ops::DIGIT_ADD, &other)),
        }
    }

    pub fn digit_complement(&self, d: Digit) -> AbacusResult<Digit> {
        match self.registry.lookup(ops::DIGIT_COMPLEMENT)? {
            Algorithm::DigitUnary(run) => run(d),
            other => Err(Self::shape_error(ops::DIGIT_COMPLEMENT, &other)),
        }
    }

    pub fn digit_compare(&self, d1: Digit, d2: Digit) -> AbacusResult<Ordering> {
        match self.registry.lookup(ops::DIGIT_COMPARE)? {
            Algorithm::DigitCompare(run) => run(d1, d2),
            other => Err(Self::shape_error(ops::DIGIT_COMPARE, &other)),
        }
    }
}

/// Bind the whole built-in operation set. Runs before the engine is
/// visible to anyone, so one-shot registration cannot collide.
fn register_builtins(
    registry: &OperationRegistry,
    system: &Arc<NumeralSystem>,
    notations: &Arc<Notations>,
    config: EngineConfig,
) -> AbacusResult<()> {
    registry.register(
        ops::NUMBER_ADD,
        Algorithm::NumberBinary(Arc::new(number_ops::add)),
    )?;
    registry.register(
        ops::NUMBER_SUBTRACT,
        Algorithm::NumberBinary(Arc::new(number_ops::subtract)),
    )?;

    let concurrent = config.concurrent_multiplication;
    registry.register(
        ops::NUMBER_MULTIPLY,
        Algorithm::NumberBinary(Arc::new(move |a: &Number, b: &Number| {
            number_ops::multiply(a, b, concurrent)
        })),
    )?;

    registry.register(
        ops::NUMBER_COMPARE,
        Algorithm::NumberCompare(Arc::new(number_ops::compare)),
    )?;
    registry.register(
        ops::NUMBER_NEGATE,
        Algorithm::NumberUnary(Arc::new(number_ops::negate)),
    )?;
    registry.register(
        ops::NUMBER_COMPLEMENT,
        Algorithm::NumberUnary(Arc::new(number_ops::complement)),
    )?;
    registry.register(
        ops::NUMBER_TRUNCATE,
        Algorithm::NumberUnary(Arc::new(number_ops::truncate)),
    )?;
    registry.register(
        ops::NUMBER_SHIFT_LEFT,
        Algorithm::NumberShift(Arc::new(number_ops::shift_left)),
    )?;
    registry.register(
        ops::NUMBER_SHIFT_RIGHT,
        Algorithm::NumberShift(Arc::new(number_ops::shift_right)),
    )?;

    let digit_system = Arc::clone(system);
    registry.register(
        ops::DIGIT_ADD,
        Algorithm::DigitAdd(Arc::new(move |d1, d2| {
            digit_ops::digit_add(&digit_system, d1, d2)
        })),
    )?;
    let digit_system = Arc::clone(system);
    registry.register(
        ops::DIGIT_COMPLEMENT,
        Algorithm::DigitUnary(Arc::new(move |d| {
            digit_ops::digit_complement(&digit_system, d)
        })),
    )?;
    registry.register(
        ops::DIGIT_COMPARE,
        Algorithm::DigitCompare(Arc::new(digit_ops::digit_compare)),
    )?;

    let parse_system = Arc::clone(system);
    let parse_notations = Arc::clone(notations);
    registry.register(
        ops::NUMBER_PARSE,
        Algorithm::Parse(Arc::new(move |base: u8, text: &str| {
            parse_notations.parse(&parse_system, base, text)
        })),
    )?;
    let format_system = Arc::clone(system);
    registry.register(
        ops::NUMBER_FORMAT,
        Algorithm::Format(Arc::new(move |n: &Number| {
            format_notation(&format_system, n)
        })),
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use abacus_core::OperationClass;

    fn engine() -> ArithmeticEngine {
        ArithmeticEngine::new().unwrap()
    }

    #[test]
    fn test_every_builtin_is_registered() {
        let engine = engine();
        for id in ops::ALL {
            assert!(engine.registry().contains(id), "{} missing", id);
        }
        assert_eq!(engine.registry().len(), ops::ALL.len());
    }

    #[test]
    fn test_scenario_add() {
        let engine = engine();
        let a = engine.number(10, "123").unwrap();
        let b = engine.number(10, "1").unwrap();
        let sum = engine.add(&a, &b).unwrap();
        assert_eq!(sum, engine.number(10, "124").unwrap());
        assert_eq!(engine.format(&sum).unwrap(), "124");
    }

    #[test]
    fn test_scenario_subtract_below_zero() {
        let engine = engine();
        let zero = engine.number(10, "0").unwrap();
        let one = engine.number(10, "1").unwrap();
        let difference = engine.subtract(&zero, &one).unwrap();
        assert_eq!(engine.format(&difference).unwrap(), "-1");
    }

    #[test]
    fn test_scenario_hex_compare() {
        let engine = engine();
        let f = engine.number(16, "F").unwrap();
        let a = engine.number(16, "A").unwrap();
        assert_eq!(engine.compare(&f, &a).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_scenario_carry_growth() {
        let engine = engine();
        let a = engine.number(10, "99").unwrap();
        let b = engine.number(10, "1").unwrap();
        let sum = engine.add(&a, &b).unwrap();
        assert_eq!(sum, engine.number(10, "100").unwrap());
        assert_eq!(sum.chain().unwrap().len(), 3);
    }

    #[test]
    fn test_algorithms_are_substitutable() {
        let engine = engine();
        // swap addition out for an algorithm that always returns the
        // left operand
        engine.registry().remove(ops::NUMBER_ADD).unwrap();
        engine
            .registry()
            .register(
                ops::NUMBER_ADD,
                Algorithm::NumberBinary(Arc::new(|a: &Number, _: &Number| Ok(a.clone()))),
            )
            .unwrap();

        let a = engine.number(10, "7").unwrap();
        let b = engine.number(10, "3").unwrap();
        assert_eq!(engine.add(&a, &b).unwrap(), a);
    }

    #[test]
    fn test_removed_operation_stops_dispatching() {
        let engine = engine();
        engine.registry().remove(ops::NUMBER_NEGATE).unwrap();
        let n = engine.number(10, "5").unwrap();
        assert!(matches!(
            engine.negate(&n),
            Err(AbacusError::OperationDoesNotExist(_))
        ));
    }

    #[test]
    fn test_mismatched_shape_is_rejected() {
        let engine = engine();
        let custom = OperationId::new("custom.unary", OperationClass::None);
        engine
            .registry()
            .register(
                custom,
                Algorithm::NumberUnary(Arc::new(|n: &Number| Ok(n.clone()))),
            )
            .unwrap();
        let a = engine.number(10, "1").unwrap();
        assert!(engine.number_binary(custom, &a, &a).is_err());
    }

    #[test]
    fn test_digit_operations_dispatch() {
        let engine = engine();
        let nine = engine.system().digit(10, 9).unwrap();
        let one = engine.system().digit(10, 1).unwrap();
        let (result, carry) = engine.digit_add(nine, one).unwrap();
        assert_eq!(result.ordinal(), 0);
        assert!(carry);

        let complemented = engine.digit_complement(nine).unwrap();
        assert_eq!(complemented.ordinal(), 0);
        assert_eq!(engine.digit_compare(nine, one).unwrap(), Ordering::Greater);
    }

    #[test]
    fn test_concurrent_multiplication_config() {
        let concurrent = ArithmeticEngine::with_config(EngineConfig {
            concurrent_multiplication: true,
        })
        .unwrap();
        let sequential = engine();

        let a = concurrent.number(10, "123.5").unwrap();
        let b = concurrent.number(10, "-456").unwrap();
        assert_eq!(
            concurrent.multiply(&a, &b).unwrap(),
            sequential.multiply(&a, &b).unwrap()
        );
    }

    #[test]
    fn test_shift_dispatch() {
        let engine = engine();
        let n = engine.number(10, "12").unwrap();
        assert_eq!(
            engine.format(&engine.shift_left(&n, 2).unwrap()).unwrap(),
            "1200"
        );
        assert_eq!(
            engine.format(&engine.shift_right(&n, 1).unwrap()).unwrap(),
            "1.2"
        );
    }

    #[test]
    fn test_parse_failure_propagates() {
        let engine = engine();
        assert!(matches!(
            engine.number(10, "not a number"),
            Err(AbacusError::NumberParsing { .. })
        ));
    }
}

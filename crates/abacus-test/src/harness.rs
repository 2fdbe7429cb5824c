//! Scenario harness
//!
//! Random operand generation plus reference checks. Decimal operands
//! double-check the kernel against native integer arithmetic; other
//! bases are exercised through textual round-trips, where the kernel
//! has to agree with itself.

use abacus_chain::Number;
use abacus_core::{AbacusResult, NumeralSystem};
use abacus_kernel::ArithmeticEngine;
use rand::Rng;

/// Random numeral generator for a base
pub struct NumeralGenerator {
    system: NumeralSystem,
}

impl NumeralGenerator {
    pub fn new() -> Self {
        NumeralGenerator {
            system: NumeralSystem::new(),
        }
    }

    /// A random standard-notation numeral: optional sign, up to
    /// `integer_digits` integer digits, up to `fraction_digits`
    /// fractional digits.
    pub fn numeral<R: Rng>(
        &self,
        rng: &mut R,
        base: u8,
        integer_digits: usize,
        fraction_digits: usize,
    ) -> AbacusResult<String> {
        let symbols = self.system.symbols(base)?;
        let mut text = String::new();
        if rng.gen_bool(0.5) {
            text.push('-');
        }
        let int_len = rng.gen_range(1..=integer_digits.max(1));
        for _ in 0..int_len {
            text.push(symbols[rng.gen_range(0..symbols.len())]);
        }
        if fraction_digits > 0 && rng.gen_bool(0.5) {
            text.push('.');
            let frac_len = rng.gen_range(1..=fraction_digits);
            for _ in 0..frac_len {
                text.push(symbols[rng.gen_range(0..symbols.len())]);
            }
        }
        Ok(text)
    }
}

impl Default for NumeralGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse, format, and re-parse: the canonical text of a numeral must be
/// a fixed point of the engine.
pub fn assert_round_trip(engine: &ArithmeticEngine, base: u8, text: &str) {
    let parsed = engine.number(base, text).expect("numeral should parse");
    let formatted = engine.format(&parsed).expect("number should format");
    let reparsed = engine
        .number(base, &formatted)
        .expect("formatted text should parse");
    assert_eq!(parsed, reparsed, "round trip diverged for {:?}", text);
}

/// Build a decimal Number from a native integer
pub fn from_i64(engine: &ArithmeticEngine, value: i64) -> AbacusResult<Number> {
    engine.number(10, &value.to_string())
}

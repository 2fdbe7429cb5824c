//! Digit-level arithmetic
//!
//! The primitives everything else is assembled from: single-digit
//! addition with carry, and the radix-minus-one complement that turns
//! subtraction into addition.

use std::cmp::Ordering;

use abacus_core::{AbacusError, AbacusResult, Digit, NumeralSystem};

/// Add two digits of the same base.
///
/// Returns `(result, carry)` with
/// `result + base * carry == d1 + d2` and carry in {0, 1}.
pub fn digit_add(
    system: &NumeralSystem,
    d1: Digit,
    d2: Digit,
) -> AbacusResult<(Digit, bool)> {
    AbacusError::check_bases(d1.base(), d2.base())?;
    let base = d1.base() as u16;
    let sum = d1.ordinal() as u16 + d2.ordinal() as u16;
    let carry = sum >= base;
    let ordinal = if carry { sum - base } else { sum } as u8;
    Ok((system.digit(d1.base(), ordinal)?, carry))
}

/// The radix-minus-one complement: `d -> base - 1 - d`
pub fn digit_complement(system: &NumeralSystem, d: Digit) -> AbacusResult<Digit> {
    system.digit(d.base(), d.base() - 1 - d.ordinal())
}

/// Ordinal comparison, failing across bases
pub fn digit_compare(d1: Digit, d2: Digit) -> AbacusResult<Ordering> {
    d1.checked_cmp(d2)
}

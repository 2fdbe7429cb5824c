//! Number formatting
//!
//! Emits standard notation. The infinite sentinel formats as `∞` (with
//! a leading `-` when negative) and is deliberately not parseable:
//! infinity only ever arises from arithmetic, never from input.

use abacus_chain::{Magnitude, Number};
use abacus_core::{AbacusResult, NumeralSystem};

/// Render a number in standard notation
pub fn format(system: &NumeralSystem, number: &Number) -> AbacusResult<String> {
    let chain = match number.magnitude() {
        Magnitude::Infinite => {
            return Ok(if number.sign().is_negative() {
                "-∞".to_string()
            } else {
                "∞".to_string()
            });
        }
        Magnitude::Finite(chain) => chain,
    };

    let base = number.base();
    let mut out = String::with_capacity(chain.len() + 2);
    if number.sign().is_negative() {
        out.push('-');
    }
    for position in (0..=chain.hi()).rev() {
        out.push(system.digit(base, chain.get(position))?.symbol());
    }
    if chain.lo() < 0 {
        out.push('.');
        for position in (chain.lo()..0).rev() {
            out.push(system.digit(base, chain.get(position))?.symbol());
        }
    }
    Ok(out)
}

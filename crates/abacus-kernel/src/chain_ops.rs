//! Chain-level arithmetic
//!
//! Position-wise algorithms over digit chains. All of them either take
//! operands by reference and return a fresh chain, or mutate a chain
//! they have exclusive access to. Operand chains are never touched.

use std::cmp::Ordering;

use abacus_chain::DigitChain;
use abacus_core::{AbacusError, AbacusResult};

/// Add two chains, least-significant position outward.
///
/// Spans are equalized first; a final outgoing carry grows the result
/// by one high digit.
pub fn add(a: &DigitChain, b: &DigitChain) -> AbacusResult<DigitChain> {
    AbacusError::check_bases(a.base(), b.base())?;
    let base = a.base();

    let mut result = a.clone();
    result.pad_to(b);

    let mut carry = 0u8;
    for position in result.lo()..=result.hi() {
        let sum = result.get(position) + b.get(position) + carry;
        carry = u8::from(sum >= base);
        result.set(position, sum % base)?;
    }
    if carry > 0 {
        result.push_high(carry);
    }
    result.trim();
    Ok(result)
}

/// Replace every digit with its radix-minus-one complement, across the
/// chain's whole span. The span itself is left untouched: complementing
/// is only meaningful relative to a fixed width.
pub fn complement_in_place(chain: &mut DigitChain) -> AbacusResult<()> {
    let base = chain.base();
    for position in chain.lo()..=chain.hi() {
        chain.set(position, base - 1 - chain.get(position))?;
    }
    Ok(())
}

/// Compare two magnitudes digit-by-digit from the most significant
/// integer position down, with implicit zero padding on the shorter side.
pub fn compare(a: &DigitChain, b: &DigitChain) -> AbacusResult<Ordering> {
    AbacusError::check_bases(a.base(), b.base())?;
    let (lo, hi) = DigitChain::common_span(a, b);
    for position in (lo..=hi).rev() {
        match a.get(position).cmp(&b.get(position)) {
            Ordering::Equal => continue,
            difference => return Ok(difference),
        }
    }
    Ok(Ordering::Equal)
}

/// Subtract by the complement method: pad to a common span, complement
/// the minuend, add the subtrahend, complement back, trim.
///
/// Only valid when the minuend's magnitude is at least the
/// subtrahend's; the caller guarantees it through the comparison step.
pub fn subtract_complement(
    minuend: &DigitChain,
    subtrahend: &DigitChain,
) -> AbacusResult<DigitChain> {
    AbacusError::check_bases(minuend.base(), subtrahend.base())?;
    debug_assert_ne!(compare(minuend, subtrahend)?, Ordering::Less);

    let mut work = minuend.clone();
    work.pad_to(subtrahend);
    complement_in_place(&mut work)?;
    // no outgoing carry can occur here while minuend >= subtrahend
    let mut difference = add(&work, subtrahend)?;
    difference.pad_to(&work);
    complement_in_place(&mut difference)?;
    difference.trim();
    Ok(difference)
}

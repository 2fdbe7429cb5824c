//! Number-level arithmetic
//!
//! The sign/zero/infinity case machines sitting on top of the chain
//! algorithms. Every binary entry point validates operand bases before
//! anything else happens.

use std::cmp::Ordering;

use abacus_chain::{DigitChain, Number};
use abacus_core::{AbacusError, AbacusResult};
use abacus_pool::{CalculationPool, PoolError};

use crate::chain_ops;

/// Add two numbers.
///
/// Opposite-signed infinities are undefined; any other infinity wins;
/// a zero operand returns the other operand verbatim. Opposite-signed
/// finite operands delegate to subtraction.
pub fn add(a: &Number, b: &Number) -> AbacusResult<Number> {
    AbacusError::check_bases(a.base(), b.base())?;

    if a.is_infinite() || b.is_infinite() {
        if a.is_infinite() && b.is_infinite() && a.sign() != b.sign() {
            return Err(AbacusError::UndefinedOperation(
                "sum of opposite-signed infinities".into(),
            ));
        }
        return Ok(if a.is_infinite() { a.clone() } else { b.clone() });
    }

    if a.is_zero() {
        return Ok(b.clone());
    }
    if b.is_zero() {
        return Ok(a.clone());
    }

    if a.sign() == b.sign() {
        let sum = chain_ops::add(a.chain()?, b.chain()?)?;
        return Ok(Number::new(a.sign(), sum));
    }

    // a + (-b) = a - b
    subtract(a, &b.with_sign(b.sign().negate()))
}

/// Subtract `subtrahend` from `minuend`.
pub fn subtract(minuend: &Number, subtrahend: &Number) -> AbacusResult<Number> {
    AbacusError::check_bases(minuend.base(), subtrahend.base())?;

    match (minuend.is_infinite(), subtrahend.is_infinite()) {
        (true, true) => {
            return if minuend.sign() == subtrahend.sign() {
                Err(AbacusError::UndefinedOperation(
                    "difference of same-signed infinities".into(),
                ))
            } else {
                Ok(minuend.clone())
            };
        }
        (true, false) => return Ok(minuend.clone()),
        (false, true) => {
            // n - ±∞ = ∓∞
            return Number::infinity(minuend.base(), subtrahend.sign().negate());
        }
        (false, false) => {}
    }

    if subtrahend.is_zero() {
        return Ok(minuend.clone());
    }
    if minuend.is_zero() {
        return Ok(subtrahend.with_sign(subtrahend.sign().negate()));
    }

    if minuend.sign() != subtrahend.sign() {
        // n - (-m) = n + m
        return add(minuend, &subtrahend.with_sign(subtrahend.sign().negate()));
    }

    // same signs: the complement method needs the larger magnitude as
    // its minuend, so compare first and swap if necessary
    let ordering = chain_ops::compare(minuend.chain()?, subtrahend.chain()?)?;
    match ordering {
        Ordering::Equal => Number::zero(minuend.base()),
        Ordering::Greater => {
            let difference =
                chain_ops::subtract_complement(minuend.chain()?, subtrahend.chain()?)?;
            Ok(Number::new(minuend.sign(), difference))
        }
        Ordering::Less => {
            let difference =
                chain_ops::subtract_complement(subtrahend.chain()?, minuend.chain()?)?;
            Ok(Number::new(minuend.sign().negate(), difference))
        }
    }
}

/// Natural-order comparison: sign first, then magnitude, with
/// infinities as each sign's unbounded extreme.
pub fn compare(a: &Number, b: &Number) -> AbacusResult<Ordering> {
    AbacusError::check_bases(a.base(), b.base())?;

    if a.sign() != b.sign() {
        return Ok(if a.sign().is_negative() {
            Ordering::Less
        } else {
            Ordering::Greater
        });
    }

    let shared = a.sign();
    let magnitude = match (a.is_infinite(), b.is_infinite()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => chain_ops::compare(a.chain()?, b.chain()?)?,
    };

    Ok(if shared.is_negative() {
        magnitude.reverse()
    } else {
        magnitude
    })
}

/// Flip the sign; zero stays positive.
pub fn negate(n: &Number) -> AbacusResult<Number> {
    Ok(n.with_sign(n.sign().negate()))
}

/// Radix-minus-one complement across the whole chain
pub fn complement(n: &Number) -> AbacusResult<Number> {
    if n.is_infinite() {
        return Err(AbacusError::UndefinedOperation(
            "complement of an infinite number".into(),
        ));
    }
    let mut chain = n.chain()?.clone();
    chain_ops::complement_in_place(&mut chain)?;
    Ok(Number::new(n.sign(), chain))
}

/// Drop the fractional side
pub fn truncate(n: &Number) -> AbacusResult<Number> {
    if n.is_infinite() {
        return Ok(n.clone());
    }
    let mut chain = n.chain()?.clone();
    chain.split_low(0);
    Ok(Number::new(n.sign(), chain))
}

/// Multiply by base^positions
pub fn shift_left(n: &Number, positions: usize) -> AbacusResult<Number> {
    shift(n, positions as isize)
}

/// Divide by base^positions, digits moving into the fraction
pub fn shift_right(n: &Number, positions: usize) -> AbacusResult<Number> {
    shift(n, -(positions as isize))
}

fn shift(n: &Number, k: isize) -> AbacusResult<Number> {
    if n.is_infinite() {
        return Ok(n.clone());
    }
    let mut chain = n.chain()?.clone();
    chain.shift(k);
    Ok(Number::new(n.sign(), chain))
}

/// One partial product: the multiplicand times a single digit ordinal,
/// shifted to the digit's position. Repeated addition, correctness
/// before speed.
fn partial_product(
    multiplicand: &DigitChain,
    ordinal: u8,
    position: isize,
) -> AbacusResult<DigitChain> {
    let mut acc = DigitChain::zero(multiplicand.base())?;
    for _ in 0..ordinal {
        acc = chain_ops::add(&acc, multiplicand)?;
    }
    acc.shift(position);
    Ok(acc)
}

/// Multiply two numbers.
///
/// Infinity times zero is undefined, infinity otherwise wins with the
/// product sign. Finite magnitudes multiply as shifted per-digit
/// partial products; `concurrent` fans the partial products out through
/// the calculation pool.
pub fn multiply(a: &Number, b: &Number, concurrent: bool) -> AbacusResult<Number> {
    AbacusError::check_bases(a.base(), b.base())?;

    let sign = a.sign().multiply(b.sign());
    if a.is_infinite() || b.is_infinite() {
        if a.is_zero() || b.is_zero() {
            return Err(AbacusError::UndefinedOperation(
                "product of zero and infinity".into(),
            ));
        }
        return Number::infinity(a.base(), sign);
    }
    if a.is_zero() || b.is_zero() {
        return Number::zero(a.base());
    }

    let multiplicand = a.chain()?;
    let multiplier = b.chain()?;
    let terms: Vec<(isize, u8)> = multiplier
        .iter()
        .filter(|&(_, ordinal)| ordinal != 0)
        .collect();

    let partials: Vec<DigitChain> = if concurrent {
        CalculationPool::run(terms, |&(position, ordinal): &(isize, u8)| {
            partial_product(multiplicand, ordinal, position)
        })
        .map_err(flatten_pool_error)?
    } else {
        let mut partials = Vec::with_capacity(terms.len());
        for (position, ordinal) in terms {
            partials.push(partial_product(multiplicand, ordinal, position)?);
        }
        partials
    };

    let mut product = DigitChain::zero(a.base())?;
    for partial in &partials {
        product = chain_ops::add(&product, partial)?;
    }
    Ok(Number::new(sign, product))
}

fn flatten_pool_error(error: PoolError<AbacusError>) -> AbacusError {
    match error {
        PoolError::NoResult { fault, .. } => fault,
        other => AbacusError::InvalidArgument(format!(
            "concurrent multiplication failed: {}",
            other
        )),
    }
}

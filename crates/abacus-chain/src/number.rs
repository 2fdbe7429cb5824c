//! The number representation
//!
//! `Number = sign + base + magnitude`, with magnitude either a finite
//! digit chain or the infinity sentinel. Numbers are immutable to
//! callers: every operation hands back a new value, and no two numbers
//! ever share a chain.

use std::fmt;

use abacus_core::{AbacusError, AbacusResult, Sign};

use crate::DigitChain;

/// A number's magnitude: a digit chain, or unbounded
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Magnitude {
    Finite(DigitChain),
    Infinite,
}

/// An arbitrary-precision number in a positional base
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Number {
    sign: Sign,
    base: u8,
    magnitude: Magnitude,
}

impl Number {
    /// Build a number from a sign and a chain. The chain is trimmed to
    /// canonical form and zero is normalized to positive.
    pub fn new(sign: Sign, mut chain: DigitChain) -> Self {
        chain.trim();
        let sign = if chain.is_zero() { Sign::Positive } else { sign };
        Number {
            sign,
            base: chain.base(),
            magnitude: Magnitude::Finite(chain),
        }
    }

    pub fn zero(base: u8) -> AbacusResult<Self> {
        Ok(Number::new(Sign::Positive, DigitChain::zero(base)?))
    }

    pub fn one(base: u8) -> AbacusResult<Self> {
        Ok(Number::new(
            Sign::Positive,
            DigitChain::from_parts(base, &[1], &[])?,
        ))
    }

    /// The infinity sentinel. Not an error state: it flows through
    /// arithmetic until an undefined combination is reached.
    pub fn infinity(base: u8, sign: Sign) -> AbacusResult<Self> {
        // reuse the chain constructor's base validation
        DigitChain::zero(base)?;
        Ok(Number {
            sign,
            base,
            magnitude: Magnitude::Infinite,
        })
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[inline]
    pub fn base(&self) -> u8 {
        self.base
    }

    #[inline]
    pub fn magnitude(&self) -> &Magnitude {
        &self.magnitude
    }

    pub fn is_infinite(&self) -> bool {
        matches!(self.magnitude, Magnitude::Infinite)
    }

    pub fn is_finite(&self) -> bool {
        !self.is_infinite()
    }

    pub fn is_zero(&self) -> bool {
        match &self.magnitude {
            Magnitude::Finite(chain) => chain.is_zero(),
            Magnitude::Infinite => false,
        }
    }

    /// The finite chain, or an `InvalidArgument` for the infinite sentinel
    pub fn chain(&self) -> AbacusResult<&DigitChain> {
        match &self.magnitude {
            Magnitude::Finite(chain) => Ok(chain),
            Magnitude::Infinite => Err(AbacusError::InvalidArgument(
                "infinite number has no digit chain".into(),
            )),
        }
    }

    /// A copy of this number carrying the given sign (zero stays positive)
    pub fn with_sign(&self, sign: Sign) -> Self {
        let sign = if self.is_zero() { Sign::Positive } else { sign };
        Number {
            sign,
            base: self.base,
            magnitude: self.magnitude.clone(),
        }
    }
}

impl fmt::Debug for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.magnitude {
            Magnitude::Finite(chain) => write!(f, "Num({}{:?})", self.sign, chain),
            Magnitude::Infinite => write!(f, "Num({}∞@{})", self.sign, self.base),
        }
    }
}

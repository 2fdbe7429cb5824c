//! Digit chain - a position-addressed digit sequence
//!
//! Positions run from `lo` (most fractional) to `hi` (most significant),
//! with position 0 the units digit. The units position is always present:
//! `lo <= 0 <= hi` holds for every chain. Canonical form carries no
//! redundant zero digits beyond the units digit itself.
//!
//! Chains are owned exclusively by the number that holds them. Every
//! mutating primitive takes `&mut self`; callers clone first when they
//! need to keep the original.

use abacus_core::{AbacusError, AbacusResult, MAX_BASE, MIN_BASE};

/// A number magnitude as an explicit digit sequence
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct DigitChain {
    base: u8,
    /// Digit ordinals, lowest position first
    digits: Vec<u8>,
    /// Position of `digits[0]`, never above 0
    lo: isize,
}

fn check_base(base: u8) -> AbacusResult<()> {
    if (MIN_BASE..=MAX_BASE).contains(&base) {
        Ok(())
    } else {
        Err(AbacusError::InvalidArgument(format!(
            "base {} outside supported range {}..={}",
            base, MIN_BASE, MAX_BASE
        )))
    }
}

impl DigitChain {
    /// The single-digit zero chain
    pub fn zero(base: u8) -> AbacusResult<Self> {
        check_base(base)?;
        Ok(DigitChain {
            base,
            digits: vec![0],
            lo: 0,
        })
    }

    /// Build a chain from integer digits (most significant first) and
    /// fractional digits (highest fractional position first).
    pub fn from_parts(base: u8, integer: &[u8], fraction: &[u8]) -> AbacusResult<Self> {
        check_base(base)?;
        for &ordinal in integer.iter().chain(fraction) {
            if ordinal >= base {
                return Err(AbacusError::InvalidArgument(format!(
                    "ordinal {} outside [0, {}) for base {}",
                    ordinal, base, base
                )));
            }
        }

        let mut digits = Vec::with_capacity(integer.len() + fraction.len() + 1);
        digits.extend(fraction.iter().rev());
        if integer.is_empty() {
            digits.push(0);
        } else {
            digits.extend(integer.iter().rev());
        }

        let mut chain = DigitChain {
            base,
            digits,
            lo: -(fraction.len() as isize),
        };
        chain.trim();
        Ok(chain)
    }

    #[inline]
    pub fn base(&self) -> u8 {
        self.base
    }

    /// Outermost fractional position (<= 0)
    #[inline]
    pub fn lo(&self) -> isize {
        self.lo
    }

    /// Outermost integer position (>= 0)
    #[inline]
    pub fn hi(&self) -> isize {
        self.lo + self.digits.len() as isize - 1
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        false // the units digit is always present
    }

    /// Digit ordinal at a position; zero outside the spanned range
    #[inline]
    pub fn get(&self, position: isize) -> u8 {
        if position < self.lo || position > self.hi() {
            0
        } else {
            self.digits[(position - self.lo) as usize]
        }
    }

    /// Overwrite the digit at a spanned position.
    ///
    /// The position must already be inside the span; grow with
    /// [`push_high`](Self::push_high)/[`push_low`](Self::push_low) or
    /// [`pad_to`](Self::pad_to) first.
    pub fn set(&mut self, position: isize, ordinal: u8) -> AbacusResult<()> {
        if ordinal >= self.base {
            return Err(AbacusError::InvalidArgument(format!(
                "ordinal {} outside [0, {}) for base {}",
                ordinal, self.base, self.base
            )));
        }
        if position < self.lo || position > self.hi() {
            return Err(AbacusError::InvalidArgument(format!(
                "position {} outside spanned range {}..={}",
                position,
                self.lo,
                self.hi()
            )));
        }
        self.digits[(position - self.lo) as usize] = ordinal;
        Ok(())
    }

    /// Append a digit at the high (most significant) end
    pub fn push_high(&mut self, ordinal: u8) {
        debug_assert!(ordinal < self.base);
        self.digits.push(ordinal);
    }

    /// Append a digit at the low (most fractional) end
    pub fn push_low(&mut self, ordinal: u8) {
        debug_assert!(ordinal < self.base);
        self.digits.insert(0, ordinal);
        self.lo -= 1;
    }

    /// Whether every digit is zero
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// Drop redundant zero digits from both ends, always keeping the
    /// units digit.
    pub fn trim(&mut self) {
        while self.hi() > 0 && *self.digits.last().unwrap_or(&1) == 0 {
            self.digits.pop();
        }
        while self.lo < 0 && self.digits.first() == Some(&0) {
            self.digits.remove(0);
            self.lo += 1;
        }
    }

    /// Extend *self* with zero digits so it spans at least the positions
    /// the reference does. The reference is never touched: this is the
    /// one legal way to equalize spans before a position-wise operation.
    pub fn pad_to(&mut self, reference: &DigitChain) {
        self.pad_span(reference.lo, reference.hi());
    }

    /// Extend with zero digits to cover `lo..=hi`
    pub fn pad_span(&mut self, lo: isize, hi: isize) {
        while self.lo > lo {
            self.push_low(0);
        }
        while self.hi() < hi {
            self.push_high(0);
        }
    }

    /// The union span two chains cover: the innermost pair of outermost
    /// positions both operands reach after padding.
    pub fn common_span(a: &DigitChain, b: &DigitChain) -> (isize, isize) {
        (a.lo.min(b.lo), a.hi().max(b.hi()))
    }

    /// Remove and return all digits below `at` (lowest first). Both the
    /// remainder and the returned run are independent afterwards; the
    /// remainder is re-anchored so the units digit survives.
    pub fn split_low(&mut self, at: isize) -> Vec<u8> {
        if at <= self.lo {
            return Vec::new();
        }
        let cut = (at.min(self.hi() + 1) - self.lo) as usize;
        let severed: Vec<u8> = self.digits.drain(..cut).collect();
        self.lo = at;
        if self.digits.is_empty() {
            self.lo = 0;
            self.digits.push(0);
        } else {
            // the units position must stay covered
            while self.lo > 0 {
                self.digits.insert(0, 0);
                self.lo -= 1;
            }
        }
        severed
    }

    /// Remove and return all digits above `at` (lowest first)
    pub fn split_high(&mut self, at: isize) -> Vec<u8> {
        if at >= self.hi() {
            return Vec::new();
        }
        let keep = (at - self.lo + 1).max(0) as usize;
        let severed: Vec<u8> = self.digits.split_off(keep);
        if self.digits.is_empty() {
            self.lo = 0;
            self.digits.push(0);
        } else if self.hi() < 0 {
            self.pad_span(self.lo, 0);
        }
        severed
    }

    /// Move every digit `k` positions: positive `k` toward the high end
    /// (multiply by base^k), negative toward the fractional end. The
    /// span is re-anchored so the units position stays covered.
    pub fn shift(&mut self, k: isize) {
        self.lo += k;
        if self.lo > 0 {
            self.pad_span(0, self.hi());
        }
        if self.hi() < 0 {
            self.pad_span(self.lo, 0);
        }
        self.trim();
    }

    /// Digits with their positions, lowest position first
    pub fn iter(&self) -> impl Iterator<Item = (isize, u8)> + '_ {
        let lo = self.lo;
        self.digits
            .iter()
            .enumerate()
            .map(move |(i, &d)| (lo + i as isize, d))
    }
}

impl std::fmt::Debug for DigitChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Chain@{}[", self.base)?;
        for p in (self.lo..=self.hi()).rev() {
            if p == -1 {
                write!(f, ".")?;
            }
            write!(f, "{}", self.get(p))?;
        }
        write!(f, "]")
    }
}

//! Numeral systems for bases 2 through 65
//!
//! One shared alphabet covers every supported base; base `b` uses its
//! first `b` symbols. The full set is the 62 alphanumerics followed by
//! `!`, `@` and `#`, all chosen so no digit symbol ever collides with a
//! sign, a fractional separator, or an exponent sign in the textual
//! notations built on top.

use std::collections::HashMap;

use crate::{AbacusError, AbacusResult, Digit};

/// Smallest supported base
pub const MIN_BASE: u8 = 2;

/// Largest supported base
pub const MAX_BASE: u8 = 65;

/// The shared symbol alphabet, ordered by ordinal
pub const ALPHABET: &str =
    "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz!@#";

/// Per-base symbol tables: ordinal -> digit and symbol -> ordinal
struct SymbolTable {
    digits: Vec<Digit>,
    by_symbol: HashMap<char, u8>,
}

impl SymbolTable {
    fn build(base: u8) -> Self {
        let mut digits = Vec::with_capacity(base as usize);
        let mut by_symbol = HashMap::with_capacity(base as usize);
        for (ordinal, symbol) in ALPHABET.chars().take(base as usize).enumerate() {
            digits.push(Digit::new(base, ordinal as u8, symbol));
            by_symbol.insert(symbol, ordinal as u8);
        }
        // Exactly `base` distinct symbols per set; a collision in the
        // alphabet would shrink the lookup map.
        debug_assert_eq!(by_symbol.len(), base as usize);
        SymbolTable { digits, by_symbol }
    }
}

/// Ordinal <-> symbol <-> digit mapping for every supported base.
///
/// All 64 symbol sets are built and validated once, at construction.
pub struct NumeralSystem {
    tables: Vec<SymbolTable>,
}

impl NumeralSystem {
    pub fn new() -> Self {
        let tables = (MIN_BASE..=MAX_BASE).map(SymbolTable::build).collect();
        NumeralSystem { tables }
    }

    fn table(&self, base: u8) -> AbacusResult<&SymbolTable> {
        if !(MIN_BASE..=MAX_BASE).contains(&base) {
            return Err(AbacusError::InvalidArgument(format!(
                "base {} outside supported range {}..={}",
                base, MIN_BASE, MAX_BASE
            )));
        }
        Ok(&self.tables[(base - MIN_BASE) as usize])
    }

    /// The digit with the given ordinal in the given base
    pub fn digit(&self, base: u8, ordinal: u8) -> AbacusResult<Digit> {
        let table = self.table(base)?;
        table.digits.get(ordinal as usize).copied().ok_or_else(|| {
            AbacusError::InvalidArgument(format!(
                "ordinal {} outside [0, {}) for base {}",
                ordinal, base, base
            ))
        })
    }

    /// The digit a symbol denotes in the given base
    pub fn digit_from_symbol(&self, base: u8, symbol: char) -> AbacusResult<Digit> {
        let table = self.table(base)?;
        match table.by_symbol.get(&symbol) {
            Some(&ordinal) => Ok(table.digits[ordinal as usize]),
            None => Err(AbacusError::InvalidArgument(format!(
                "{:?} is not a base-{} digit symbol",
                symbol, base
            ))),
        }
    }

    /// The zero digit of a base
    pub fn zero(&self, base: u8) -> AbacusResult<Digit> {
        self.digit(base, 0)
    }

    /// The unit digit of a base
    pub fn one(&self, base: u8) -> AbacusResult<Digit> {
        self.digit(base, 1)
    }

    /// The symbol set of a base, ordered by ordinal
    pub fn symbols(&self, base: u8) -> AbacusResult<Vec<char>> {
        let table = self.table(base)?;
        Ok(table.digits.iter().map(|d| d.symbol()).collect())
    }

    /// Whether a base's symbol set contains the given character
    pub fn contains_symbol(&self, base: u8, symbol: char) -> AbacusResult<bool> {
        Ok(self.table(base)?.by_symbol.contains_key(&symbol))
    }
}

impl Default for NumeralSystem {
    fn default() -> Self {
        Self::new()
    }
}

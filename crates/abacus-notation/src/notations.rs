//! Notation recognition and parsing
//!
//! One regular expression per (base, notation), compiled once. The
//! scientific exponent sign is mandatory exactly when the base's own
//! symbol set contains `E` or `e` as digit symbols; without it,
//! `1.2E3` in such a base could not be told apart from a plain mantissa.

use abacus_chain::{DigitChain, Number};
use abacus_core::{AbacusError, AbacusResult, NumeralSystem, Sign, MAX_BASE, MIN_BASE};
use regex::Regex;

/// Largest accepted exponent magnitude. A shift beyond this is a typo,
/// not a number.
const MAX_EXPONENT: i64 = 10_000;

/// Compiled notation recognizers for one base
struct NotationSet {
    standard: Regex,
    scientific: Regex,
}

/// Notation recognizers for every supported base
pub struct Notations {
    sets: Vec<NotationSet>,
}

/// Escape a symbol for use inside a regex character class
fn class_escape(symbol: char, out: &mut String) {
    if matches!(symbol, '\\' | ']' | '^' | '-' | '[') {
        out.push('\\');
    }
    out.push(symbol);
}

fn symbol_class(symbols: &[char]) -> String {
    let mut class = String::with_capacity(symbols.len() + 2);
    for &symbol in symbols {
        class_escape(symbol, &mut class);
    }
    class
}

impl NotationSet {
    fn build(system: &NumeralSystem, base: u8) -> AbacusResult<Self> {
        let symbols = system.symbols(base)?;
        let class = symbol_class(&symbols);

        let standard = format!(
            r"^(?P<sign>[+-])?(?P<int>[{class}]+)(?:\.(?P<frac>[{class}]+))?$"
        );

        // Exponent sign is mandatory when E or e is itself a digit symbol
        let sign_required = system.contains_symbol(base, 'E')?
            || system.contains_symbol(base, 'e')?;
        let esign = if sign_required {
            r"(?P<esign>[+-])"
        } else {
            r"(?P<esign>[+-])?"
        };
        let scientific = format!(
            r"^(?P<sign>[+-])?(?P<lead>[{class}])\.(?P<mantissa>[{class}]+)[eE]{esign}(?P<exp>[{class}]+)$"
        );

        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| {
                AbacusError::InvalidArgument(format!(
                    "notation pattern for base {} failed to compile: {}",
                    base, e
                ))
            })
        };

        Ok(NotationSet {
            standard: compile(&standard)?,
            scientific: compile(&scientific)?,
        })
    }
}

fn sign_of(capture: Option<&str>) -> Sign {
    match capture {
        Some("-") => Sign::Negative,
        _ => Sign::Positive,
    }
}

fn ordinals(system: &NumeralSystem, base: u8, digits: &str) -> Result<Vec<u8>, String> {
    digits
        .chars()
        .map(|symbol| {
            system
                .digit_from_symbol(base, symbol)
                .map(|d| d.ordinal())
                .map_err(|e| e.to_string())
        })
        .collect()
}

impl Notations {
    /// Compile the recognizers for every base the system supports
    pub fn new(system: &NumeralSystem) -> AbacusResult<Self> {
        let mut sets = Vec::with_capacity((MAX_BASE - MIN_BASE + 1) as usize);
        for base in MIN_BASE..=MAX_BASE {
            sets.push(NotationSet::build(system, base)?);
        }
        Ok(Notations { sets })
    }

    fn set(&self, base: u8) -> AbacusResult<&NotationSet> {
        if !(MIN_BASE..=MAX_BASE).contains(&base) {
            return Err(AbacusError::InvalidArgument(format!(
                "base {} outside supported range {}..={}",
                base, MIN_BASE, MAX_BASE
            )));
        }
        Ok(&self.sets[(base - MIN_BASE) as usize])
    }

    /// Parse text as a base-`base` number.
    ///
    /// Scientific notation is tried first, then standard. When neither
    /// matches, the error aggregates both notation-specific causes.
    pub fn parse(
        &self,
        system: &NumeralSystem,
        base: u8,
        text: &str,
    ) -> AbacusResult<Number> {
        let set = self.set(base)?;
        let mut causes = Vec::new();

        match parse_scientific(system, set, base, text) {
            Ok(number) => return Ok(number),
            Err(cause) => causes.push(format!("scientific: {}", cause)),
        }
        match parse_standard(system, set, base, text) {
            Ok(number) => return Ok(number),
            Err(cause) => causes.push(format!("standard: {}", cause)),
        }

        Err(AbacusError::NumberParsing {
            base,
            input: text.to_string(),
            causes,
        })
    }
}

fn parse_standard(
    system: &NumeralSystem,
    set: &NotationSet,
    base: u8,
    text: &str,
) -> Result<Number, String> {
    let captures = set
        .standard
        .captures(text)
        .ok_or_else(|| format!("{:?} does not match the standard notation", text))?;

    let sign = sign_of(captures.name("sign").map(|m| m.as_str()));
    let integer = ordinals(system, base, &captures["int"])?;
    let fraction = match captures.name("frac") {
        Some(m) => ordinals(system, base, m.as_str())?,
        None => Vec::new(),
    };

    let chain =
        DigitChain::from_parts(base, &integer, &fraction).map_err(|e| e.to_string())?;
    Ok(Number::new(sign, chain))
}

fn parse_scientific(
    system: &NumeralSystem,
    set: &NotationSet,
    base: u8,
    text: &str,
) -> Result<Number, String> {
    let captures = set
        .scientific
        .captures(text)
        .ok_or_else(|| format!("{:?} does not match the scientific notation", text))?;

    let sign = sign_of(captures.name("sign").map(|m| m.as_str()));
    let lead = ordinals(system, base, &captures["lead"])?;
    let mantissa = ordinals(system, base, &captures["mantissa"])?;

    // Exponent digits are read in the same base
    let mut exponent: i64 = 0;
    for ordinal in ordinals(system, base, &captures["exp"])? {
        exponent = exponent
            .checked_mul(base as i64)
            .and_then(|v| v.checked_add(ordinal as i64))
            .filter(|v| *v <= MAX_EXPONENT)
            .ok_or_else(|| format!("exponent magnitude above {}", MAX_EXPONENT))?;
    }
    if sign_of(captures.name("esign").map(|m| m.as_str())).is_negative() {
        exponent = -exponent;
    }

    let mut chain =
        DigitChain::from_parts(base, &lead, &mantissa).map_err(|e| e.to_string())?;
    chain.shift(exponent as isize);
    Ok(Number::new(sign, chain))
}

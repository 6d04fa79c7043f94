//! # Alphabet
//!
//! Ordered set of unique symbols defining a positional numbering system.
//! The position of a symbol is its digit value; the first symbol is zero.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::{collections::HashMap, fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    constants::{DEFAULT_ALPHABET, UUID_BITS},
    error::AlphabetError,
};

/// An immutable, validated symbol alphabet.
///
/// Symbols are Unicode scalar values, so an alphabet is not limited to ASCII.
/// Construction fails if fewer than two symbols are supplied or if any symbol
/// repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Alphabet {
    symbols: Vec<char>,
    digits: HashMap<char, usize>,
}

impl Alphabet {
    /// Builds an alphabet from the symbols of `symbols`, in order.
    pub fn new(symbols: &str) -> Result<Self, AlphabetError> {
        let symbols: Vec<char> = symbols.chars().collect();

        if symbols.len() < 2 {
            return Err(AlphabetError::TooShort { len: symbols.len() });
        }

        let mut digits = HashMap::with_capacity(symbols.len());
        for (digit, &symbol) in symbols.iter().enumerate() {
            if digits.insert(symbol, digit).is_some() {
                return Err(AlphabetError::Duplicate { symbol });
            }
        }

        Ok(Self { symbols, digits })
    }

    /// Number of symbols (the base).
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; an alphabet has at least two symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The symbol for digit value zero, used for padding.
    pub fn zero(&self) -> char {
        self.symbols[0]
    }

    /// Returns the symbol for `digit`, if it is in range.
    pub fn symbol(&self, digit: usize) -> Option<char> {
        self.symbols.get(digit).copied()
    }

    /// Returns the digit value of `symbol`, if it belongs to the alphabet.
    pub fn digit(&self, symbol: char) -> Option<usize> {
        self.digits.get(&symbol).copied()
    }

    /// Whether `symbol` belongs to the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.digits.contains_key(&symbol)
    }

    /// Whether every symbol of `s` belongs to the alphabet.
    pub fn contains_all(&self, s: &str) -> bool {
        s.chars().all(|c| self.contains(c))
    }

    /// The symbols in digit order.
    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    /// Smallest number of digits able to represent every unsigned value of
    /// `bits` bits (capped at 128).
    ///
    /// For the default 62-symbol alphabet and 128 bits this is 22.
    pub fn min_width(&self, bits: u32) -> usize {
        let bits = bits.min(UUID_BITS);
        let base = self.symbols.len() as u128;
        let mut max = u128::MAX.checked_shr(UUID_BITS - bits).unwrap_or(0);

        let mut width = 0;
        while max > 0 {
            max /= base;
            width += 1;
        }
        width
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        let symbols: Vec<char> = DEFAULT_ALPHABET.chars().collect();
        let digits = symbols
            .iter()
            .enumerate()
            .map(|(digit, &symbol)| (symbol, digit))
            .collect();
        Self { symbols, digits }
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = AlphabetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.symbols.into_iter().collect()
    }
}

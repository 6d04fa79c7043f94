//! # Base-N Encoding
//!
//! Arbitrary-base conversion of big-endian unsigned byte strings.
//! The bytes are treated as one big integer and re-expressed in the base
//! given by an [`Alphabet`]. Width is not fixed at this level.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use crate::{
    alphabet::Alphabet,
    error::{Error, Result},
};

/// Encodes `bytes` (big-endian) into the minimal base-N string.
///
/// Uses repeated long division of the byte array by the alphabet size,
/// collecting remainders as digits.
///
/// # Returns
/// - An empty `String` for empty input
/// - A single zero symbol when every byte is zero
/// - Otherwise the digits, most significant first, without leading zeros
#[allow(clippy::cast_possible_truncation)]
pub fn encode(bytes: &[u8], alphabet: &Alphabet) -> String {
    if bytes.is_empty() {
        return String::new();
    }

    let base = alphabet.len() as u64;
    let mut number: Vec<u8> = bytes.iter().copied().skip_while(|&b| b == 0).collect();
    if number.is_empty() {
        return alphabet.zero().to_string();
    }

    let mut digits = Vec::with_capacity(bytes.len() * 2);
    while !number.is_empty() {
        let mut remainder = 0u64;
        let mut quotient = Vec::with_capacity(number.len());

        for &byte in &number {
            let acc = (remainder << 8) | u64::from(byte);
            // acc < base * 256, so the quotient digit fits in a byte
            let q = (acc / base) as u8;
            remainder = acc % base;
            if q > 0 || !quotient.is_empty() {
                quotient.push(q);
            }
        }

        digits.push(remainder as usize);
        number = quotient;
    }

    let symbols = alphabet.symbols();
    digits.iter().rev().map(|&d| symbols[d]).collect()
}

/// Decodes a base-N string into the minimal big-endian byte sequence.
///
/// Accumulates digits by multiplying the running value by the alphabet
/// size and adding each digit. A non-empty string whose value is zero
/// decodes to `[0]`; the empty string decodes to `[]`.
///
/// # Errors
/// Returns [`Error::InvalidSymbol`] for the first symbol outside `alphabet`.
#[allow(clippy::cast_possible_truncation)]
pub fn decode(s: &str, alphabet: &Alphabet) -> Result<Vec<u8>> {
    if s.is_empty() {
        return Ok(Vec::new());
    }

    let base = alphabet.len() as u64;
    // Little-endian while accumulating
    let mut bytes: Vec<u8> = Vec::with_capacity(s.len());

    for (position, symbol) in s.chars().enumerate() {
        let digit = alphabet
            .digit(symbol)
            .ok_or(Error::InvalidSymbol { symbol, position })?;

        let mut carry = digit as u64;
        for byte in &mut bytes {
            carry += u64::from(*byte) * base;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    if bytes.is_empty() {
        bytes.push(0);
    }
    bytes.reverse();
    Ok(bytes)
}

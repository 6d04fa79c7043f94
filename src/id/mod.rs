//! # UUID Encoding
//!
//! Fixed-width encoding of 128-bit UUIDs over an [`Alphabet`].
//! With the default 62-symbol alphabet every UUID becomes exactly 22 characters,
//! e.g. `06ad547f-fe02-477b-9473-f7977e4d5e17` ⇄ `0cBaidlJ84Ggc5JA7IYCgv`.
//!
//! ## Width policy
//! - Shorter encodings are left-padded with the alphabet's zero symbol
//! - Longer encodings lose leading zero symbols down to the target length,
//!   never below it and never a non-zero symbol
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod base_n;
pub mod generate;

use std::{cmp::Ordering, iter, sync::LazyLock};

use tracing::debug;
use uuid::Uuid;

pub use self::generate::{v1, v1_with, v4, v4_from_random_bytes, v5, Namespace};
use crate::{
    alphabet::Alphabet,
    constants::{LENGTH, UUID_BITS, UUID_BYTES, UUID_HEX_LENGTH},
    error::{AlphabetError, Error, Result},
};

static DEFAULT_CODEC: LazyLock<Uuid62> = LazyLock::new(Uuid62::default);

/// Input accepted by [`Uuid62::encode`]: raw bytes or UUID text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UuidInput<'a> {
    /// 16 big-endian bytes
    Bytes([u8; UUID_BYTES]),
    /// UUID text; dashes are ignored and hex digits may be any case
    Text(&'a str),
}

impl UuidInput<'_> {
    /// Resolves the input to its 16 bytes.
    pub fn to_bytes(self) -> Result<[u8; UUID_BYTES]> {
        match self {
            Self::Bytes(bytes) => Ok(bytes),
            Self::Text(text) => parse_canonical(text).map(Uuid::into_bytes),
        }
    }
}

impl From<[u8; UUID_BYTES]> for UuidInput<'_> {
    fn from(bytes: [u8; UUID_BYTES]) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8; UUID_BYTES]> for UuidInput<'_> {
    fn from(bytes: &[u8; UUID_BYTES]) -> Self {
        Self::Bytes(*bytes)
    }
}

impl From<Uuid> for UuidInput<'_> {
    fn from(uuid: Uuid) -> Self {
        Self::Bytes(uuid.into_bytes())
    }
}

impl From<&Uuid> for UuidInput<'_> {
    fn from(uuid: &Uuid) -> Self {
        Self::Bytes(*uuid.as_bytes())
    }
}

impl<'a> From<&'a str> for UuidInput<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for UuidInput<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

/// Parses UUID text after stripping dashes. Accepts upper and lower case hex.
pub(crate) fn parse_canonical(text: &str) -> Result<Uuid> {
    let digits: String = text.chars().filter(|&c| c != '-').collect();

    if digits.len() != UUID_HEX_LENGTH || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidUuid(text.to_string()));
    }

    Uuid::try_parse(&digits).map_err(|_| Error::InvalidUuid(text.to_string()))
}

/// Fixed-width UUID codec bound to one alphabet.
///
/// Instances are immutable; hold one per alphabet you need.
///
/// # Example
/// ```
/// use uuid62::Uuid62;
///
/// let codec = Uuid62::new();
/// let id = codec.encode("06ad547f-fe02-477b-9473-f7977e4d5e17").unwrap();
/// assert_eq!(id, "0cBaidlJ84Ggc5JA7IYCgv");
/// assert_eq!(codec.decode(&id).unwrap(), "06ad547f-fe02-477b-9473-f7977e4d5e17");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uuid62 {
    alphabet: Alphabet,
    length: usize,
}

impl Default for Uuid62 {
    fn default() -> Self {
        Self {
            alphabet: Alphabet::default(),
            length: LENGTH,
        }
    }
}

impl Uuid62 {
    /// Creates a codec with the default alphabet and a length of 22.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a codec for `alphabet`.
    ///
    /// The length is 22, or the minimum width that can hold every
    /// 128-bit value if the alphabet is too small for 22.
    pub fn with_alphabet(alphabet: Alphabet) -> Self {
        let length = alphabet.min_width(UUID_BITS).max(LENGTH);
        debug!(base = alphabet.len(), length, "created uuid62 codec");
        Self { alphabet, length }
    }

    /// Starts building a codec with an explicit alphabet and/or length.
    pub fn builder() -> Uuid62Builder {
        Uuid62Builder::default()
    }

    /// The alphabet used by this codec.
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Number of symbols in every encoded identifier.
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Encodes raw bytes, a [`Uuid`], or UUID text.
    ///
    /// # Errors
    /// Returns [`Error::InvalidUuid`] when text input is not 32 hex digits
    /// once dashes are removed.
    pub fn encode<'a>(&self, input: impl Into<UuidInput<'a>>) -> Result<String> {
        let bytes = input.into().to_bytes()?;
        Ok(self.encode_bytes(&bytes))
    }

    /// Encodes an already parsed [`Uuid`].
    pub fn encode_uuid(&self, uuid: &Uuid) -> String {
        self.encode_bytes(uuid.as_bytes())
    }

    fn encode_bytes(&self, bytes: &[u8; UUID_BYTES]) -> String {
        self.fit_width(base_n::encode(bytes, &self.alphabet))
    }

    /// Decodes an identifier to lowercase, hyphenated UUID text.
    pub fn decode(&self, encoded: &str) -> Result<String> {
        self.decode_uuid(encoded)
            .map(|uuid| uuid.hyphenated().to_string())
    }

    /// Decodes an identifier to a [`Uuid`].
    ///
    /// # Errors
    /// - [`Error::InvalidSymbol`] if `encoded` contains a symbol outside the alphabet
    /// - [`Error::Overflow`] if the value does not fit in 128 bits
    pub fn decode_uuid(&self, encoded: &str) -> Result<Uuid> {
        let bytes = base_n::decode(encoded, &self.alphabet)?;
        let significant = bytes
            .iter()
            .position(|&b| b != 0)
            .map_or(&[][..], |start| &bytes[start..]);

        if significant.len() > UUID_BYTES {
            return Err(Error::Overflow {
                bytes: significant.len(),
            });
        }

        // Right-align; the remaining high bytes stay zero
        let mut raw = [0u8; UUID_BYTES];
        raw[UUID_BYTES - significant.len()..].copy_from_slice(significant);
        Ok(Uuid::from_bytes(raw))
    }

    /// Whether `s` has the shape of an identifier from this codec:
    /// exactly [`length`](Self::length) symbols, all from the alphabet.
    pub fn is_encoded(&self, s: &str) -> bool {
        s.chars().count() == self.length && self.alphabet.contains_all(s)
    }

    fn fit_width(&self, encoded: String) -> String {
        let zero = self.alphabet.zero();
        let len = encoded.chars().count();

        match len.cmp(&self.length) {
            Ordering::Equal => encoded,
            Ordering::Less => iter::repeat(zero)
                .take(self.length - len)
                .chain(encoded.chars())
                .collect(),
            Ordering::Greater => {
                let trim = encoded
                    .chars()
                    .take(len - self.length)
                    .take_while(|&c| c == zero)
                    .count();
                encoded.chars().skip(trim).collect()
            }
        }
    }
}

/// Builder for [`Uuid62`].
#[derive(Debug, Clone, Default)]
pub struct Uuid62Builder {
    alphabet: Option<Alphabet>,
    length: Option<usize>,
}

impl Uuid62Builder {
    /// Sets the alphabet (default: `0-9a-zA-Z`).
    #[must_use]
    pub fn alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = Some(alphabet);
        self
    }

    /// Sets an explicit encoded length.
    #[must_use]
    pub const fn length(mut self, length: usize) -> Self {
        self.length = Some(length);
        self
    }

    /// Builds the codec.
    ///
    /// # Errors
    /// Returns [`AlphabetError::InsufficientWidth`] if the explicit length
    /// cannot hold every 128-bit value in the chosen alphabet.
    pub fn build(self) -> Result<Uuid62> {
        let alphabet = self.alphabet.unwrap_or_default();
        let required = alphabet.min_width(UUID_BITS);

        let length = match self.length {
            Some(length) if length < required => {
                return Err(AlphabetError::InsufficientWidth { length, required }.into());
            }
            Some(length) => length,
            None => required.max(LENGTH),
        };

        debug!(base = alphabet.len(), length, "built uuid62 codec");
        Ok(Uuid62 { alphabet, length })
    }
}

/// The shared codec with the default alphabet.
pub fn default_codec() -> &'static Uuid62 {
    &DEFAULT_CODEC
}

/// Encodes `input` with the default alphabet.
pub fn encode<'a>(input: impl Into<UuidInput<'a>>) -> Result<String> {
    DEFAULT_CODEC.encode(input)
}

/// Decodes `encoded` with the default alphabet.
pub fn decode(encoded: &str) -> Result<String> {
    DEFAULT_CODEC.decode(encoded)
}

//! # Errors
//!
//! Error types surfaced by the alphabet and the codecs.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

/// Error raised when an alphabet (or a codec built on it) is misconfigured.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlphabetError {
    /// Fewer than two symbols
    #[error("alphabet needs at least 2 symbols, got {len}")]
    TooShort { len: usize },

    /// The same symbol appears twice
    #[error("alphabet contains duplicate symbol '{symbol}'")]
    Duplicate { symbol: char },

    /// The requested width cannot hold every 128-bit value
    #[error("length {length} is too short for this alphabet, need at least {required}")]
    InsufficientWidth { length: usize, required: usize },
}

/// Error type for encode/decode operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input contains a symbol outside the active alphabet
    #[error("invalid symbol '{symbol}' at position {position}")]
    InvalidSymbol { symbol: char, position: usize },

    /// Namespace argument is missing or unparseable
    #[error("invalid namespace: {0}")]
    InvalidNamespace(String),

    /// Text is not 32 hex digits once dashes are removed
    #[error("invalid UUID: '{0}'")]
    InvalidUuid(String),

    /// Decoded value does not fit in 128 bits
    #[error("decoded value needs {bytes} bytes, a UUID holds 16")]
    Overflow { bytes: usize },

    #[error(transparent)]
    Alphabet(#[from] AlphabetError),
}

/// Result type for encode/decode operations.
pub type Result<T> = std::result::Result<T, Error>;

//! # uuid62
//!
//! Short, fixed-width encodings of UUIDs.
//!
//! A UUID is a 128-bit unsigned integer; re-expressing it in base 62 instead of
//! base 16 shrinks the 36-character hyphenated form to exactly 22 characters,
//! which suits URLs, filenames, and sort keys. The mapping is a bijection, not a
//! hash: every identifier decodes back to the UUID it came from.
//!
//! ## Features
//!
//! - **Any Alphabet**: Encode over any set of two or more unique symbols
//! - **Fixed Width**: Identifiers are padded so leading zero bytes never shorten them
//! - **Generation**: Version 1, 4, and 5 UUIDs returned already encoded
//! - **Config File**: Pick the alphabet in `~/.config/uuid62/config`
//!
//! ```
//! let id = uuid62::encode("ffffffff-ffff-ffff-ffff-ffffffffffff").unwrap();
//! assert_eq!(id, "7N42dgm5tFLK9N8MT7fHC7");
//! assert_eq!(uuid62::decode(&id).unwrap(), "ffffffff-ffff-ffff-ffff-ffffffffffff");
//! ```
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

pub mod alphabet;
pub mod config;
pub mod constants;
pub mod error;
pub mod id;

pub use alphabet::Alphabet;
pub use config::{set_home_override, Config};
pub use constants::{DEFAULT_ALPHABET, DNS, LENGTH, URL, UUID_HEX_LENGTH};
pub use error::{AlphabetError, Error, Result};
pub use id::{
    decode, default_codec, encode, v1, v1_with, v4, v4_from_random_bytes, v5, Namespace, Uuid62,
    Uuid62Builder, UuidInput,
};
pub use uuid::{Timestamp, Uuid};

//! # Constants
//!
//! Centralized constants for magic values used throughout uuid62.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Encoding
// =============================================================================

/// Default alphabet: digits, lowercase, uppercase (62 symbols).
pub const DEFAULT_ALPHABET: &str =
    "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Target length of an encoded identifier for the default alphabet.
pub const LENGTH: usize = 22;

/// Number of hex digits in a UUID without dashes.
pub const UUID_HEX_LENGTH: usize = 32;

/// Width of a UUID in bytes.
pub const UUID_BYTES: usize = 16;

/// Width of a UUID in bits.
pub const UUID_BITS: u32 = 128;

// =============================================================================
// Namespaces
// =============================================================================

/// The RFC 4122 URL namespace (`6ba7b811-9dad-11d1-80b4-00c04fd430c8`),
/// encoded with the default alphabet.
pub const URL: &str = "3h8Pgc0Wb7WH6HsyG77m40";

/// The RFC 4122 DNS namespace (`6ba7b810-9dad-11d1-80b4-00c04fd430c8`),
/// encoded with the default alphabet.
pub const DNS: &str = "3h8PgalTIPNcNhUD4ZbIKY";

// =============================================================================
// File System
// =============================================================================

/// Configuration directory name (inside `~/.config`).
pub const CONFIG_DIR: &str = "uuid62";

/// Configuration file name (inside `CONFIG_DIR`).
pub const CONFIG_FILENAME: &str = "config";

//! # Codec Tests
//!
//! End-to-end tests of the public encode/decode API: known vectors,
//! fixed width, and round-trips across alphabets.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::BASE64_ALPHABET;
use uuid62::{Alphabet, Error, Uuid, Uuid62, LENGTH, UUID_HEX_LENGTH};

/// Deterministic spread of 128-bit values, including both extremes.
fn sample_values() -> Vec<u128> {
    let mut values = vec![0, 1, 61, 62, u128::MAX, u128::MAX - 1, 1 << 127];
    let mut x: u128 = 0x9e37_79b9_7f4a_7c15_f39c_c060_5ced_c834;
    for shift in 0..128 {
        x = x.wrapping_mul(0x2545_f491_4f6c_dd1d).wrapping_add(0x1405_7b7e_f767_814f);
        values.push(x >> shift);
    }
    values
}

// =============================================================================
// Known Vectors
// =============================================================================

#[test]
fn test_known_vectors() {
    assert_eq!(
        uuid62::encode("00000000-0000-0000-0000-000000000000").unwrap(),
        "0000000000000000000000"
    );
    assert_eq!(
        uuid62::encode("06ad547f-fe02-477b-9473-f7977e4d5e17").unwrap(),
        "0cBaidlJ84Ggc5JA7IYCgv"
    );
    assert_eq!(
        uuid62::encode("ffffffff-ffff-ffff-ffff-ffffffffffff").unwrap(),
        "7N42dgm5tFLK9N8MT7fHC7"
    );
    assert_eq!(
        uuid62::decode("7N42dgm5tFLK9N8MT7fHC7").unwrap(),
        "ffffffff-ffff-ffff-ffff-ffffffffffff"
    );
}

#[test]
fn test_case_insensitive_text() {
    assert_eq!(
        uuid62::encode("06AD547F-FE02-477B-9473-F7977E4D5E17").unwrap(),
        uuid62::encode("06ad547f-fe02-477b-9473-f7977e4d5e17").unwrap()
    );
}

#[test]
fn test_decode_is_lowercase_and_dashed() {
    let text = uuid62::decode("5FY8KwTsQaUJ2KzHJGetfE").unwrap();
    assert_eq!(text, "ba86b8f0-6fdf-4944-87a0-8a491a19490e");

    let groups: Vec<usize> = text.split('-').map(str::len).collect();
    assert_eq!(groups, vec![8, 4, 4, 4, 12]);
    assert_eq!(text.replace('-', "").len(), UUID_HEX_LENGTH);
}

#[test]
fn test_namespace_constants() {
    assert_eq!(
        uuid62::decode(uuid62::URL).unwrap(),
        Uuid::NAMESPACE_URL.hyphenated().to_string()
    );
    assert_eq!(
        uuid62::decode(uuid62::DNS).unwrap(),
        Uuid::NAMESPACE_DNS.hyphenated().to_string()
    );
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_round_trip_and_fixed_width() {
    let codec = Uuid62::new();
    for value in sample_values() {
        let uuid = Uuid::from_u128(value);
        let encoded = codec.encode(uuid).unwrap();

        assert_eq!(encoded.len(), LENGTH, "width of {uuid}");
        assert_eq!(codec.decode(&encoded).unwrap(), uuid.hyphenated().to_string());
    }
}

#[test]
fn test_encoding_preserves_order() {
    let ascii_order: String = ('0'..='9').chain('A'..='Z').chain('a'..='z').collect();
    let codec = Uuid62::with_alphabet(Alphabet::new(&ascii_order).unwrap());
    let mut values = sample_values();
    values.sort_unstable();
    values.dedup();

    let encoded: Vec<String> = values
        .iter()
        .map(|&v| codec.encode_uuid(&Uuid::from_u128(v)))
        .collect();

    // Symbols in ASCII order plus fixed width keep numeric order
    assert!(encoded.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_alphabet_changes_representation_not_value() {
    let base62 = Uuid62::new();
    let base64 = Uuid62::with_alphabet(Alphabet::new(BASE64_ALPHABET).unwrap());
    let reversed: String = uuid62::DEFAULT_ALPHABET.chars().rev().collect();
    let reversed = Uuid62::with_alphabet(Alphabet::new(&reversed).unwrap());

    for value in sample_values() {
        let uuid = Uuid::from_u128(value);
        let a = base62.encode_uuid(&uuid);
        let b = base64.encode_uuid(&uuid);
        let c = reversed.encode_uuid(&uuid);

        assert_ne!(a, c);
        assert_eq!(base62.decode_uuid(&a).unwrap(), uuid);
        assert_eq!(base64.decode_uuid(&b).unwrap(), uuid);
        assert_eq!(reversed.decode_uuid(&c).unwrap(), uuid);
    }
}

#[test]
fn test_binary_alphabet_round_trip() {
    let codec = Uuid62::with_alphabet(Alphabet::new("01").unwrap());
    assert_eq!(codec.length(), 128);

    for value in sample_values() {
        let encoded = codec.encode(Uuid::from_u128(value)).unwrap();
        assert_eq!(encoded, format!("{value:0128b}"));
        assert_eq!(codec.decode_uuid(&encoded).unwrap().as_u128(), value);
    }
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_decode_rejects_foreign_symbols() {
    let codec = Uuid62::with_alphabet(Alphabet::new("0123456789abcdef").unwrap());
    assert_eq!(
        codec.decode("0cBaidlJ84Ggc5JA7IYCgv"),
        Err(Error::InvalidSymbol {
            symbol: 'B',
            position: 2
        })
    );
}

#[test]
fn test_encode_rejects_malformed_text() {
    assert!(matches!(
        uuid62::encode("06ad547f-fe02-477b-9473"),
        Err(Error::InvalidUuid(_))
    ));
}

#[test]
fn test_error_messages() {
    let err = uuid62::decode("abc$").unwrap_err();
    assert_eq!(err.to_string(), "invalid symbol '$' at position 3");

    let err = Alphabet::new("aa").unwrap_err();
    assert_eq!(err.to_string(), "alphabet contains duplicate symbol 'a'");
}

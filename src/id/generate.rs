//! # ID Generation
//!
//! Generates new identifiers that are always returned in encoded form.
//! The UUIDs themselves come from the `uuid` crate:
//! - `v1`: time-based, with a random multicast node id
//! - `v1_with`: time-based, from a caller-supplied timestamp and node id
//! - `v4`: random
//! - `v4_from_random_bytes`: version 4 from caller-supplied random bytes
//! - `v5`: SHA-1 hash of a name within a namespace
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use rand::Rng;
use tracing::warn;
use uuid::{Builder, Timestamp, Uuid};

use super::{parse_canonical, Uuid62, DEFAULT_CODEC};
use crate::error::{Error, Result};

/// Namespace argument for [`Uuid62::v5_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Namespace<'a> {
    /// An identifier produced by the same codec
    Encoded(&'a str),
    /// UUID text (dashes optional, any case)
    Canonical(&'a str),
    /// An already parsed UUID
    Uuid(Uuid),
}

impl<'a> Namespace<'a> {
    /// Classifies an untyped namespace string.
    ///
    /// A string with the shape of an identifier from `codec` (its exact
    /// length, every symbol in its alphabet) is treated as encoded; anything
    /// else must be UUID text. When a string fits both readings the encoded
    /// reading wins and a warning is logged.
    ///
    /// # Errors
    /// Returns [`Error::InvalidNamespace`] if `namespace` is empty or fits
    /// neither reading.
    pub fn detect(namespace: &'a str, codec: &Uuid62) -> Result<Self> {
        if namespace.is_empty() {
            return Err(Error::InvalidNamespace("a namespace is required".to_string()));
        }

        if codec.is_encoded(namespace) {
            if parse_canonical(namespace).is_ok() {
                warn!(
                    namespace,
                    "namespace is also valid UUID text, decoding it as an identifier"
                );
            }
            return Ok(Self::Encoded(namespace));
        }

        match parse_canonical(namespace) {
            Ok(_) => Ok(Self::Canonical(namespace)),
            Err(_) => Err(Error::InvalidNamespace(format!(
                "'{namespace}' is neither an encoded identifier nor a UUID"
            ))),
        }
    }

    /// Resolves the namespace to a UUID, decoding it with `codec` if needed.
    pub fn resolve(self, codec: &Uuid62) -> Result<Uuid> {
        let invalid = |namespace: &str, err: Error| {
            Error::InvalidNamespace(format!("'{namespace}': {err}"))
        };

        match self {
            Self::Encoded(namespace) => codec
                .decode_uuid(namespace)
                .map_err(|err| invalid(namespace, err)),
            Self::Canonical(namespace) => {
                parse_canonical(namespace).map_err(|err| invalid(namespace, err))
            }
            Self::Uuid(uuid) => Ok(uuid),
        }
    }
}

impl From<Uuid> for Namespace<'_> {
    fn from(uuid: Uuid) -> Self {
        Self::Uuid(uuid)
    }
}

/// Random node id with the multicast bit set, as RFC 4122 asks for
/// node ids that are not a real MAC address.
fn random_node_id() -> [u8; 6] {
    let mut rng = rand::rng();
    let mut node: [u8; 6] = rng.random();
    node[0] |= 0x01;
    node
}

impl Uuid62 {
    /// Generates a random (version 4) identifier.
    pub fn v4(&self) -> String {
        self.encode_uuid(&Uuid::new_v4())
    }

    /// Generates a version 4 identifier from supplied random bytes.
    ///
    /// The version and variant bits are overwritten; the remaining 122 bits
    /// are taken from `bytes` as-is.
    pub fn v4_from_random_bytes(&self, bytes: [u8; 16]) -> String {
        self.encode_uuid(&Builder::from_random_bytes(bytes).into_uuid())
    }

    /// Generates a time-based (version 1) identifier.
    pub fn v1(&self) -> String {
        self.encode_uuid(&Uuid::now_v1(&random_node_id()))
    }

    /// Generates a time-based (version 1) identifier for a given timestamp
    /// and node id.
    pub fn v1_with(&self, ts: Timestamp, node: &[u8; 6]) -> String {
        self.encode_uuid(&Uuid::new_v1(ts, node))
    }

    /// Generates a name-based (version 5) identifier.
    ///
    /// `namespace` may be an identifier from this codec (such as
    /// [`URL`](crate::URL) or [`DNS`](crate::DNS) for the default alphabet)
    /// or UUID text. See [`Namespace::detect`].
    ///
    /// # Errors
    /// Returns [`Error::InvalidNamespace`] if `namespace` is empty or invalid.
    pub fn v5(&self, name: &str, namespace: &str) -> Result<String> {
        let namespace = Namespace::detect(namespace, self)?;
        self.v5_with(name, namespace)
    }

    /// Generates a name-based (version 5) identifier from a typed namespace.
    pub fn v5_with(&self, name: &str, namespace: Namespace<'_>) -> Result<String> {
        let namespace = namespace.resolve(self)?;
        Ok(self.encode_uuid(&Uuid::new_v5(&namespace, name.as_bytes())))
    }
}

/// Generates a random identifier with the default alphabet.
pub fn v4() -> String {
    DEFAULT_CODEC.v4()
}

/// Generates a version 4 identifier from random bytes with the default alphabet.
pub fn v4_from_random_bytes(bytes: [u8; 16]) -> String {
    DEFAULT_CODEC.v4_from_random_bytes(bytes)
}

/// Generates a time-based identifier with the default alphabet.
pub fn v1() -> String {
    DEFAULT_CODEC.v1()
}

/// Generates a time-based identifier from a timestamp and node id with the
/// default alphabet.
pub fn v1_with(ts: Timestamp, node: &[u8; 6]) -> String {
    DEFAULT_CODEC.v1_with(ts, node)
}

/// Generates a name-based identifier with the default alphabet.
pub fn v5(name: &str, namespace: &str) -> Result<String> {
    DEFAULT_CODEC.v5(name, namespace)
}

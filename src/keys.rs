//! Keys produced and consumed by key management operations.

use rand::RngCore;
use rsa::{RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroize;

use crate::common::timingsafe_eq;
use crate::error::*;

/// The kind of key an unwrap operation is asked to reconstruct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyType {
    Secret,
    Public,
    Private,
}

impl std::fmt::Display for KeyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            KeyType::Secret => "secret",
            KeyType::Public => "public",
            KeyType::Private => "private",
        };
        f.write_str(name)
    }
}

/// A symmetric key (typically a Content Encryption Key), zeroized on drop.
#[derive(Clone)]
pub struct SecretKey {
    algorithm: String,
    key: Vec<u8>,
}

impl SecretKey {
    /// Create a key for `algorithm` (e.g. `"AES"`) from raw bytes.
    pub fn new(algorithm: impl Into<String>, key: Vec<u8>) -> Self {
        SecretKey {
            algorithm: algorithm.into(),
            key,
        }
    }

    /// Create a key by copying raw bytes.
    pub fn from_slice(algorithm: impl Into<String>, key: &[u8]) -> Self {
        Self::new(algorithm, key.to_vec())
    }

    /// Generate a random key of `len` bytes.
    pub fn generate(algorithm: impl Into<String>, len: usize) -> Self {
        let mut key = vec![0u8; len];
        rand::thread_rng().fill_bytes(&mut key);
        Self::new(algorithm, key)
    }

    /// The algorithm this key is meant for.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Get the key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.key.len()
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty()
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

impl AsRef<[u8]> for SecretKey {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.algorithm == other.algorithm
            && self.key.len() == other.key.len()
            && timingsafe_eq(&self.key, &other.key)
    }
}

impl Eq for SecretKey {}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretKey")
            .field("algorithm", &self.algorithm)
            .field("bits", &(self.key.len() * 8))
            .finish_non_exhaustive()
    }
}

/// A key reconstructed by an unwrap operation.
#[derive(Clone)]
pub enum Key {
    Secret(SecretKey),
    Public(RsaPublicKey),
    Private(RsaPrivateKey),
}

impl std::fmt::Debug for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Secret(key) => f.debug_tuple("Secret").field(key).finish(),
            Key::Public(pk) => f.debug_tuple("Public").field(pk).finish(),
            Key::Private(_) => f.write_str("Private(..)"),
        }
    }
}

impl Key {
    pub fn key_type(&self) -> KeyType {
        match self {
            Key::Secret(_) => KeyType::Secret,
            Key::Public(_) => KeyType::Public,
            Key::Private(_) => KeyType::Private,
        }
    }

    /// Return the symmetric key, or fail if the unwrap produced anything else.
    pub fn into_secret_key(self) -> Result<SecretKey, Error> {
        match self {
            Key::Secret(key) => Ok(key),
            other => bail!(KeyWrapError::UnexpectedKeyType(other.key_type())),
        }
    }
}

//! Per-call inputs and outputs of key management operations.

use crate::common::SecureRandom;
use crate::keys::SecretKey;

/// Input of a key encryption: the key-encryption key, the content encryption
/// algorithm that provides the CEK and, optionally, a random source.
///
/// When no random source is given, `rand::thread_rng()` is used.
pub struct EncryptionKeyRequest<'a, K: ?Sized, S: ?Sized> {
    key: &'a K,
    encryption_algorithm: &'a S,
    random: Option<&'a mut dyn SecureRandom>,
}

impl<'a, K: ?Sized, S: ?Sized> EncryptionKeyRequest<'a, K, S> {
    pub fn new(key: &'a K, encryption_algorithm: &'a S) -> Self {
        EncryptionKeyRequest {
            key,
            encryption_algorithm,
            random: None,
        }
    }

    /// Use a specific random source for this request.
    pub fn with_random(mut self, random: &'a mut dyn SecureRandom) -> Self {
        self.random = Some(random);
        self
    }

    pub fn key(&self) -> &'a K {
        self.key
    }

    pub fn encryption_algorithm(&self) -> &'a S {
        self.encryption_algorithm
    }

    pub fn has_random(&self) -> bool {
        self.random.is_some()
    }

    pub(crate) fn into_parts(self) -> (&'a K, &'a S, Option<&'a mut dyn SecureRandom>) {
        (self.key, self.encryption_algorithm, self.random)
    }
}

impl<K: ?Sized, S: ?Sized> std::fmt::Debug for EncryptionKeyRequest<'_, K, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptionKeyRequest")
            .field("has_random", &self.has_random())
            .finish_non_exhaustive()
    }
}

/// Input of a key decryption: the key-encryption key and the encrypted CEK.
pub struct DecryptionKeyRequest<'a, K: ?Sized> {
    key: &'a K,
    payload: &'a [u8],
}

impl<K: ?Sized> std::fmt::Debug for DecryptionKeyRequest<'_, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecryptionKeyRequest")
            .field("payload_len", &self.payload.len())
            .finish_non_exhaustive()
    }
}

impl<K: ?Sized> Clone for DecryptionKeyRequest<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K: ?Sized> Copy for DecryptionKeyRequest<'_, K> {}

impl<'a, K: ?Sized> DecryptionKeyRequest<'a, K> {
    pub fn new(key: &'a K, payload: &'a [u8]) -> Self {
        DecryptionKeyRequest { key, payload }
    }

    pub fn key(&self) -> &'a K {
        self.key
    }

    /// The encrypted key.
    pub fn payload(&self) -> &'a [u8] {
        self.payload
    }
}

/// Output of a key encryption: the generated CEK and its encrypted form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyResult {
    key: SecretKey,
    payload: Vec<u8>,
}

impl KeyResult {
    pub fn new(key: SecretKey, payload: Vec<u8>) -> Self {
        KeyResult { key, payload }
    }

    /// The Content Encryption Key, to be used by the content encryption algorithm.
    pub fn key(&self) -> &SecretKey {
        &self.key
    }

    /// The encrypted key, to be transmitted alongside the token.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn into_parts(self) -> (SecretKey, Vec<u8>) {
        (self.key, self.payload)
    }
}

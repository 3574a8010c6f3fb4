//! Content encryption algorithms, as sources of Content Encryption Keys.
//!
//! Encrypting the payload itself is left to the caller; key management only
//! needs a fresh key of the right size for each token.

use crate::error::*;
use crate::keys::SecretKey;

/// Algorithm name attached to every generated CEK.
pub const CEK_ALGORITHM: &str = "AES";

/// Something that can produce a fresh symmetric Content Encryption Key.
///
/// Key management algorithms call `generate_key` exactly once per encryption
/// request.
pub trait ContentKeySource {
    fn generate_key(&self) -> Result<SecretKey, Error>;
}

/// Content encryption algorithm identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContentEncryption {
    /// AES-128-CBC with HMAC-SHA-256
    A128CbcHs256,
    /// AES-192-CBC with HMAC-SHA-384
    A192CbcHs384,
    /// AES-256-CBC with HMAC-SHA-512
    A256CbcHs512,
    /// AES-128-GCM
    A128GCM,
    /// AES-192-GCM
    A192GCM,
    /// AES-256-GCM (recommended default)
    #[default]
    A256GCM,
}

impl ContentEncryption {
    /// Get the JWE "enc" header value for this algorithm.
    pub fn alg_name(&self) -> &'static str {
        match self {
            ContentEncryption::A128CbcHs256 => "A128CBC-HS256",
            ContentEncryption::A192CbcHs384 => "A192CBC-HS384",
            ContentEncryption::A256CbcHs512 => "A256CBC-HS512",
            ContentEncryption::A128GCM => "A128GCM",
            ContentEncryption::A192GCM => "A192GCM",
            ContentEncryption::A256GCM => "A256GCM",
        }
    }

    /// Get the required key size in bytes.
    ///
    /// CBC-HMAC keys carry both the MAC key and the encryption key.
    pub fn key_size(&self) -> usize {
        match self {
            ContentEncryption::A128CbcHs256 => 32,
            ContentEncryption::A192CbcHs384 => 48,
            ContentEncryption::A256CbcHs512 => 64,
            ContentEncryption::A128GCM => 16,
            ContentEncryption::A192GCM => 24,
            ContentEncryption::A256GCM => 32,
        }
    }

    /// Generate a random Content Encryption Key (CEK) for this algorithm.
    pub fn generate_cek(&self) -> SecretKey {
        SecretKey::generate(CEK_ALGORITHM, self.key_size())
    }
}

impl ContentKeySource for ContentEncryption {
    fn generate_key(&self) -> Result<SecretKey, Error> {
        Ok(self.generate_cek())
    }
}

//! RSA key management algorithms for JWE: `RSA1_5`, `RSA-OAEP` and `RSA-OAEP-256`.
//!
//! The Content Encryption Key is generated by the content encryption
//! algorithm, then wrapped with the recipient's RSA public key. Decryption
//! unwraps it with the matching private key and checks that the result is a
//! symmetric key.

use serde::{Deserialize, Serialize};

use crate::algorithms::content::{ContentKeySource, CEK_ALGORITHM};
use crate::cipher;
use crate::common::SecureRandom;
use crate::error::*;
use crate::keys::{KeyType, SecretKey};
use crate::params::OaepParams;
use crate::request::{DecryptionKeyRequest, EncryptionKeyRequest, KeyResult};
use crate::rsa_keys::{validate_key_size, RsaKeyLike, RsaPrivateKeyLike, RsaPublicKeyLike};

/// An RSA key management algorithm.
///
/// Instances are immutable; a single instance can be shared between threads
/// and used for any number of concurrent operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RsaKeyAlgorithm {
    id: String,
    transformation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    params: Option<OaepParams>,
}

impl RsaKeyAlgorithm {
    /// Create an algorithm that uses the cipher's default padding parameters.
    pub fn new(id: impl Into<String>, transformation: impl Into<String>) -> Self {
        RsaKeyAlgorithm {
            id: id.into(),
            transformation: transformation.into(),
            params: None,
        }
    }

    /// Create an algorithm with fixed padding parameters, applied to both
    /// wrapping and unwrapping.
    pub fn with_params(
        id: impl Into<String>,
        transformation: impl Into<String>,
        params: OaepParams,
    ) -> Self {
        RsaKeyAlgorithm {
            id: id.into(),
            transformation: transformation.into(),
            params: Some(params),
        }
    }

    /// RSAES-PKCS1-v1_5
    pub fn rsa1_5() -> Self {
        Self::new("RSA1_5", "RSA/ECB/PKCS1Padding")
    }

    /// RSAES-OAEP with SHA-1 and MGF1/SHA-1
    pub fn rsa_oaep() -> Self {
        Self::new("RSA-OAEP", "RSA/ECB/OAEPWithSHA-1AndMGF1Padding")
    }

    /// RSAES-OAEP with SHA-256 and MGF1/SHA-256
    pub fn rsa_oaep_256() -> Self {
        Self::with_params(
            "RSA-OAEP-256",
            "RSA/ECB/OAEPWithSHA-256AndMGF1Padding",
            OaepParams::sha256(),
        )
    }

    /// The algorithm identifier, e.g. `RSA-OAEP-256`.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The cipher transformation, e.g. `RSA/ECB/OAEPWithSHA-256AndMGF1Padding`.
    pub fn transformation(&self) -> &str {
        &self.transformation
    }

    /// The fixed padding parameters, if any.
    pub fn params(&self) -> Option<&OaepParams> {
        self.params.as_ref()
    }

    /// Generate a new Content Encryption Key and wrap it with the request's public key.
    pub fn encrypt<K, S>(&self, request: EncryptionKeyRequest<'_, K, S>) -> Result<KeyResult, Error>
    where
        K: RsaKeyLike + RsaPublicKeyLike + ?Sized,
        S: ContentKeySource + ?Sized,
    {
        let (key, encryption_algorithm, random) = request.into_parts();
        validate_key_size(key)?;

        let cek = encryption_algorithm.generate_key()?;
        ensure!(!cek.is_empty(), KeyWrapError::EmptyContentEncryptionKey);

        let mut thread_rng = rand::thread_rng();
        let rng: &mut dyn SecureRandom = match random {
            Some(rng) => rng,
            None => &mut thread_rng,
        };
        let kek = key.rsa_public_key();
        let params = self.params.as_ref();
        let payload = cipher::execute(&self.transformation, |cipher| {
            cipher.init_wrap(kek, params, rng)?.wrap(&cek)
        })?;

        Ok(KeyResult::new(cek, payload))
    }

    /// Unwrap an encrypted Content Encryption Key with the request's private key.
    pub fn decrypt<K>(&self, request: DecryptionKeyRequest<'_, K>) -> Result<SecretKey, Error>
    where
        K: RsaKeyLike + RsaPrivateKeyLike + ?Sized,
    {
        let payload = request.payload();
        ensure!(!payload.is_empty(), KeyWrapError::EmptyEncryptedKey);
        let key = request.key();
        validate_key_size(key)?;

        let kek = key.rsa_private_key();
        let params = self.params.as_ref();
        let unwrapped = cipher::execute(&self.transformation, |cipher| {
            cipher
                .init_unwrap(kek, params)?
                .unwrap(payload, CEK_ALGORITHM, KeyType::Secret)
        })?;

        unwrapped.into_secret_key()
    }
}

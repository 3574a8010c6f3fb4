//! Fixed padding parameters bound to a key management algorithm.

use rsa::Oaep;
use serde::{Deserialize, Serialize};
use sha2::digest::DynDigest;

/// Digest algorithms usable for OAEP and its MGF1 mask generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    #[serde(rename = "SHA-1")]
    Sha1,
    #[serde(rename = "SHA-224")]
    Sha224,
    #[serde(rename = "SHA-256")]
    Sha256,
    #[serde(rename = "SHA-384")]
    Sha384,
    #[serde(rename = "SHA-512")]
    Sha512,
}

impl HashAlgorithm {
    /// Standard name, as used in cipher transformations.
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha1 => "SHA-1",
            HashAlgorithm::Sha224 => "SHA-224",
            HashAlgorithm::Sha256 => "SHA-256",
            HashAlgorithm::Sha384 => "SHA-384",
            HashAlgorithm::Sha512 => "SHA-512",
        }
    }

    /// Parse a digest name; the dash is optional and case is ignored.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.to_ascii_uppercase().replace('-', "");
        match normalized.as_str() {
            "SHA1" => Some(HashAlgorithm::Sha1),
            "SHA224" => Some(HashAlgorithm::Sha224),
            "SHA256" => Some(HashAlgorithm::Sha256),
            "SHA384" => Some(HashAlgorithm::Sha384),
            "SHA512" => Some(HashAlgorithm::Sha512),
            _ => None,
        }
    }

    /// Digest output size in bytes.
    pub fn output_size(&self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha224 => 28,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    fn new_digest(&self) -> Box<dyn DynDigest + Send + Sync> {
        match self {
            HashAlgorithm::Sha1 => Box::new(sha1::Sha1::default()),
            HashAlgorithm::Sha224 => Box::new(sha2::Sha224::default()),
            HashAlgorithm::Sha256 => Box::new(sha2::Sha256::default()),
            HashAlgorithm::Sha384 => Box::new(sha2::Sha384::default()),
            HashAlgorithm::Sha512 => Box::new(sha2::Sha512::default()),
        }
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// RSAES-OAEP parameters: message digest, MGF1 digest and optional label.
///
/// Both sides of an exchange must use identical parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OaepParams {
    pub digest: HashAlgorithm,
    pub mgf1_digest: HashAlgorithm,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl OaepParams {
    pub fn new(digest: HashAlgorithm, mgf1_digest: HashAlgorithm) -> Self {
        OaepParams {
            digest,
            mgf1_digest,
            label: None,
        }
    }

    /// SHA-256 with MGF1/SHA-256, as required by `RSA-OAEP-256`.
    pub fn sha256() -> Self {
        Self::new(HashAlgorithm::Sha256, HashAlgorithm::Sha256)
    }

    /// Set the OAEP label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Largest message that can be wrapped under a modulus of `modulus_size` bytes.
    pub fn max_message_len(&self, modulus_size: usize) -> usize {
        modulus_size.saturating_sub(2 * self.digest.output_size() + 2)
    }

    // A fresh padding instance carries its own digest state.
    pub(crate) fn padding(&self) -> Oaep {
        Oaep {
            digest: self.digest.new_digest(),
            mgf_digest: self.mgf1_digest.new_digest(),
            label: self.label.clone(),
        }
    }
}

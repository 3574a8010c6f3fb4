//! RSA key-encryption keys.
//!
//! Key management operations are generic over two capability sets: every key
//! exposes its RSA properties through [`RsaKeyLike`], and its role through
//! [`RsaPublicKeyLike`] (wrapping) or [`RsaPrivateKeyLike`] (unwrapping).
//! The traits are implemented for the `rsa` crate's key types as well as for
//! [`RsaEncryptionKey`] and [`RsaDecryptionKey`], which add PEM/DER handling
//! and reject weak moduli.

use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};

use crate::common::MIN_RSA_MODULUS_BITS;
use crate::error::*;

/// Properties shared by all RSA keys.
pub trait RsaKeyLike {
    /// Modulus size in bytes.
    fn modulus_size(&self) -> usize;

    /// Modulus size in bits.
    fn modulus_bits(&self) -> usize;
}

/// An RSA key that can wrap keys.
pub trait RsaPublicKeyLike {
    fn rsa_public_key(&self) -> &RsaPublicKey;
}

/// An RSA key that can unwrap keys.
pub trait RsaPrivateKeyLike {
    fn rsa_private_key(&self) -> &RsaPrivateKey;
}

impl RsaKeyLike for RsaPublicKey {
    fn modulus_size(&self) -> usize {
        self.size()
    }

    fn modulus_bits(&self) -> usize {
        self.n().bits()
    }
}

impl RsaPublicKeyLike for RsaPublicKey {
    fn rsa_public_key(&self) -> &RsaPublicKey {
        self
    }
}

impl RsaKeyLike for RsaPrivateKey {
    fn modulus_size(&self) -> usize {
        self.size()
    }

    fn modulus_bits(&self) -> usize {
        self.n().bits()
    }
}

impl RsaPrivateKeyLike for RsaPrivateKey {
    fn rsa_private_key(&self) -> &RsaPrivateKey {
        self
    }
}

pub(crate) fn validate_key_size<K: RsaKeyLike + ?Sized>(key: &K) -> Result<(), Error> {
    ensure!(
        key.modulus_bits() >= MIN_RSA_MODULUS_BITS,
        KeyWrapError::WeakKey
    );
    Ok(())
}

/// RSA public key used to wrap content encryption keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaEncryptionKey {
    pk: RsaPublicKey,
}

impl RsaEncryptionKey {
    /// Create an encryption key from a DER-encoded public key (SPKI or PKCS#1).
    pub fn from_der(der: &[u8]) -> Result<Self, Error> {
        let pk = RsaPublicKey::from_public_key_der(der)
            .or_else(|_| RsaPublicKey::from_pkcs1_der(der))?;
        Self::from_public_key(pk)
    }

    /// Create an encryption key from a PEM-encoded public key (SPKI or PKCS#1).
    pub fn from_pem(pem: &str) -> Result<Self, Error> {
        let pem = pem.trim();
        let pk = RsaPublicKey::from_public_key_pem(pem)
            .or_else(|_| RsaPublicKey::from_pkcs1_pem(pem))?;
        Self::from_public_key(pk)
    }

    /// Wrap an existing public key.
    pub fn from_public_key(pk: RsaPublicKey) -> Result<Self, Error> {
        validate_key_size(&pk)?;
        Ok(RsaEncryptionKey { pk })
    }

    /// Export the key as DER.
    pub fn to_der(&self) -> Result<Vec<u8>, Error> {
        Ok(self.pk.to_public_key_der()?.as_bytes().to_vec())
    }

    /// Export the key as PEM.
    pub fn to_pem(&self) -> Result<String, Error> {
        Ok(self.pk.to_public_key_pem(LineEnding::LF)?)
    }
}

impl AsRef<RsaPublicKey> for RsaEncryptionKey {
    fn as_ref(&self) -> &RsaPublicKey {
        &self.pk
    }
}

impl RsaKeyLike for RsaEncryptionKey {
    fn modulus_size(&self) -> usize {
        self.pk.size()
    }

    fn modulus_bits(&self) -> usize {
        self.pk.modulus_bits()
    }
}

impl RsaPublicKeyLike for RsaEncryptionKey {
    fn rsa_public_key(&self) -> &RsaPublicKey {
        &self.pk
    }
}

/// RSA private key used to unwrap content encryption keys.
#[derive(Clone)]
pub struct RsaDecryptionKey {
    sk: RsaPrivateKey,
}

impl std::fmt::Debug for RsaDecryptionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaDecryptionKey")
            .field("modulus_bits", &self.modulus_bits())
            .finish_non_exhaustive()
    }
}

impl RsaDecryptionKey {
    /// Create a decryption key from a DER-encoded private key (PKCS#8 or PKCS#1).
    pub fn from_der(der: &[u8]) -> Result<Self, Error> {
        let sk = RsaPrivateKey::from_pkcs8_der(der)
            .or_else(|_| RsaPrivateKey::from_pkcs1_der(der))?;
        Self::from_private_key(sk)
    }

    /// Create a decryption key from a PEM-encoded private key (PKCS#8 or PKCS#1).
    pub fn from_pem(pem: &str) -> Result<Self, Error> {
        let pem = pem.trim();
        let sk = RsaPrivateKey::from_pkcs8_pem(pem)
            .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))?;
        Self::from_private_key(sk)
    }

    /// Wrap an existing private key.
    pub fn from_private_key(sk: RsaPrivateKey) -> Result<Self, Error> {
        if sk.validate().is_err() {
            bail!(KeyWrapError::InvalidKeyPair);
        }
        validate_key_size(&sk)?;
        Ok(RsaDecryptionKey { sk })
    }

    /// Export the private key as PKCS#8 DER.
    pub fn to_der(&self) -> Result<Vec<u8>, Error> {
        Ok(self.sk.to_pkcs8_der()?.as_bytes().to_vec())
    }

    /// Export the private key as PKCS#8 PEM.
    pub fn to_pem(&self) -> Result<String, Error> {
        Ok(self.sk.to_pkcs8_pem(LineEnding::LF)?.to_string())
    }

    /// Get the public encryption key.
    pub fn encryption_key(&self) -> RsaEncryptionKey {
        RsaEncryptionKey {
            pk: self.sk.to_public_key(),
        }
    }
}

impl AsRef<RsaPrivateKey> for RsaDecryptionKey {
    fn as_ref(&self) -> &RsaPrivateKey {
        &self.sk
    }
}

impl RsaKeyLike for RsaDecryptionKey {
    fn modulus_size(&self) -> usize {
        self.sk.size()
    }

    fn modulus_bits(&self) -> usize {
        self.sk.modulus_bits()
    }
}

impl RsaPrivateKeyLike for RsaDecryptionKey {
    fn rsa_private_key(&self) -> &RsaPrivateKey {
        &self.sk
    }
}

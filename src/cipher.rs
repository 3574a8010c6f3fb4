//! Transformation-scoped RSA cipher handles.
//!
//! A transformation string (`ALG/MODE/PADDING`) names the primitive to
//! instantiate. [`execute`] acquires a fresh [`Cipher`] for it, hands it to a
//! single operation and turns any provider failure into
//! [`KeyWrapError::Security`]. Handles are never cached or shared.

use std::str::FromStr;

use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroizing;

use crate::common::SecureRandom;
use crate::error::*;
use crate::keys::{Key, KeyType, SecretKey};
use crate::params::{HashAlgorithm, OaepParams};

// Encoded length of 0x00 || 0x02 || PS (>= 8 bytes) || 0x00
const PKCS1_OVERHEAD: usize = 11;

/// Padding named by a transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Padding {
    /// RSAES-PKCS1-v1_5
    Pkcs1,
    /// RSAES-OAEP with the given message digest
    Oaep(HashAlgorithm),
}

impl Padding {
    fn from_name(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "pkcs1padding" => Some(Padding::Pkcs1),
            "oaeppadding" => Some(Padding::Oaep(HashAlgorithm::Sha1)),
            _ => name
                .strip_prefix("oaepwith")
                .and_then(|rest| rest.strip_suffix("andmgf1padding"))
                .and_then(HashAlgorithm::from_name)
                .map(Padding::Oaep),
        }
    }
}

/// A parsed RSA cipher transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformation {
    padding: Padding,
}

impl Transformation {
    pub fn padding(&self) -> Padding {
        self.padding
    }
}

impl FromStr for Transformation {
    type Err = CipherError;

    fn from_str(transformation: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = transformation.split('/').map(str::trim).collect();
        let (algorithm, mode, padding) = match parts.as_slice() {
            [algorithm] => (*algorithm, None, None),
            [algorithm, mode, padding] => (*algorithm, Some(*mode), Some(*padding)),
            _ => return Err(CipherError::NoSuchAlgorithm(transformation.to_string())),
        };
        if !algorithm.eq_ignore_ascii_case("RSA") {
            return Err(CipherError::NoSuchAlgorithm(transformation.to_string()));
        }
        if let Some(mode) = mode {
            if !mode.eq_ignore_ascii_case("ECB") && !mode.eq_ignore_ascii_case("NONE") {
                return Err(CipherError::NoSuchAlgorithm(transformation.to_string()));
            }
        }
        let padding = match padding {
            None => Padding::Pkcs1,
            Some(name) => Padding::from_name(name)
                .ok_or_else(|| CipherError::NoSuchPadding(name.to_string()))?,
        };
        Ok(Transformation { padding })
    }
}

impl std::fmt::Display for Transformation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.padding {
            Padding::Pkcs1 => f.write_str("RSA/ECB/PKCS1Padding"),
            Padding::Oaep(digest) => write!(f, "RSA/ECB/OAEPWith{}AndMGF1Padding", digest),
        }
    }
}

/// Padding with its parameters fully resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
enum PaddingScheme {
    Pkcs1v15,
    Oaep(OaepParams),
}

impl PaddingScheme {
    fn resolve(padding: Padding, params: Option<&OaepParams>) -> Result<Self, CipherError> {
        match (padding, params) {
            (Padding::Pkcs1, None) => Ok(PaddingScheme::Pkcs1v15),
            (Padding::Pkcs1, Some(_)) => Err(CipherError::InvalidAlgorithmParameter(
                "PKCS#1 v1.5 padding does not take parameters",
            )),
            // Without explicit parameters, MGF1 uses SHA-1 regardless of the message digest.
            (Padding::Oaep(digest), None) => Ok(PaddingScheme::Oaep(OaepParams::new(
                digest,
                HashAlgorithm::Sha1,
            ))),
            (Padding::Oaep(_), Some(params)) => Ok(PaddingScheme::Oaep(params.clone())),
        }
    }

    fn check_modulus(&self, modulus_size: usize) -> Result<(), CipherError> {
        let capacity = match self {
            PaddingScheme::Pkcs1v15 => modulus_size.saturating_sub(PKCS1_OVERHEAD),
            PaddingScheme::Oaep(params) => params.max_message_len(modulus_size),
        };
        if capacity == 0 {
            return Err(CipherError::InvalidKey(
                "modulus is too small for the padding scheme",
            ));
        }
        Ok(())
    }
}

/// An uninitialized cipher for one transformation.
#[derive(Debug)]
pub struct Cipher {
    transformation: Transformation,
}

impl Cipher {
    pub fn get_instance(transformation: &str) -> Result<Self, CipherError> {
        Ok(Cipher {
            transformation: transformation.parse()?,
        })
    }

    pub fn transformation(&self) -> &Transformation {
        &self.transformation
    }

    /// Initialize the cipher for wrapping keys under `kek`.
    pub fn init_wrap<'a>(
        self,
        kek: &'a RsaPublicKey,
        params: Option<&OaepParams>,
        rng: &'a mut dyn SecureRandom,
    ) -> Result<WrapCipher<'a>, CipherError> {
        let scheme = PaddingScheme::resolve(self.transformation.padding, params)?;
        scheme.check_modulus(kek.size())?;
        Ok(WrapCipher { kek, scheme, rng })
    }

    /// Initialize the cipher for unwrapping keys with `kek`.
    pub fn init_unwrap<'a>(
        self,
        kek: &'a RsaPrivateKey,
        params: Option<&OaepParams>,
    ) -> Result<UnwrapCipher<'a>, CipherError> {
        let scheme = PaddingScheme::resolve(self.transformation.padding, params)?;
        scheme.check_modulus(kek.size())?;
        Ok(UnwrapCipher { kek, scheme })
    }
}

/// A cipher initialized in wrap mode.
pub struct WrapCipher<'a> {
    kek: &'a RsaPublicKey,
    scheme: PaddingScheme,
    rng: &'a mut dyn SecureRandom,
}

impl WrapCipher<'_> {
    /// Encrypt the raw bytes of `key`.
    pub fn wrap(&mut self, key: &SecretKey) -> Result<Vec<u8>, CipherError> {
        if key.is_empty() {
            return Err(CipherError::InvalidKey("cannot wrap an empty key"));
        }
        let rng = &mut self.rng;
        let wrapped = match &self.scheme {
            PaddingScheme::Pkcs1v15 => self.kek.encrypt(rng, Pkcs1v15Encrypt, key.as_bytes())?,
            PaddingScheme::Oaep(params) => {
                self.kek.encrypt(rng, params.padding(), key.as_bytes())?
            }
        };
        Ok(wrapped)
    }
}

/// A cipher initialized in unwrap mode.
pub struct UnwrapCipher<'a> {
    kek: &'a RsaPrivateKey,
    scheme: PaddingScheme,
}

impl UnwrapCipher<'_> {
    /// Decrypt `wrapped` and rebuild a key of type `key_type`.
    ///
    /// Secret keys are labelled with `algorithm`. Public keys are decoded from
    /// SPKI DER and private keys from PKCS#8 DER; both require `"RSA"`.
    pub fn unwrap(
        &self,
        wrapped: &[u8],
        algorithm: &str,
        key_type: KeyType,
    ) -> Result<Key, CipherError> {
        let encoded = Zeroizing::new(match &self.scheme {
            PaddingScheme::Pkcs1v15 => self.kek.decrypt(Pkcs1v15Encrypt, wrapped)?,
            PaddingScheme::Oaep(params) => self.kek.decrypt(params.padding(), wrapped)?,
        });
        if key_type != KeyType::Secret && !algorithm.eq_ignore_ascii_case("RSA") {
            return Err(CipherError::NoSuchAlgorithm(algorithm.to_string()));
        }
        let key = match key_type {
            KeyType::Secret => {
                if encoded.is_empty() {
                    return Err(CipherError::InvalidKey("unwrapped key is empty"));
                }
                Key::Secret(SecretKey::from_slice(algorithm, &encoded))
            }
            KeyType::Public => Key::Public(RsaPublicKey::from_public_key_der(&encoded)?),
            KeyType::Private => Key::Private(RsaPrivateKey::from_pkcs8_der(&encoded)?),
        };
        Ok(key)
    }
}

/// Run `op` against a freshly acquired cipher for `transformation`.
///
/// The cipher is moved into `op` and dropped when it returns. Any failure,
/// including an unsupported transformation, is reported as
/// [`KeyWrapError::Security`] with the original cause as its source.
pub fn execute<T, F>(transformation: &str, op: F) -> Result<T, Error>
where
    F: FnOnce(Cipher) -> Result<T, CipherError>,
{
    let result = Cipher::get_instance(transformation).and_then(|cipher| {
        log::trace!("Acquired [{}] cipher", cipher.transformation());
        op(cipher)
    });
    result.map_err(|source| {
        log::debug!("[{}] cipher operation failed: {}", transformation, source);
        Error::from(KeyWrapError::Security {
            transformation: transformation.to_string(),
            source,
        })
    })
}

#[allow(unused)]
pub use anyhow::{anyhow, bail, ensure, Error};

use crate::keys::KeyType;

#[derive(Debug, thiserror::Error)]
pub enum KeyWrapError {
    #[error("Encrypted key payload cannot be empty")]
    EmptyEncryptedKey,
    #[error("Content encryption algorithm generated an empty key")]
    EmptyContentEncryptionKey,
    #[error("RSA key is too weak")]
    WeakKey,
    #[error("Invalid key pair")]
    InvalidKeyPair,
    #[error("Cipher unwrap must return a secret key, got a {0} key")]
    UnexpectedKeyType(KeyType),
    #[error("Unable to execute [{transformation}] cipher operation")]
    Security {
        transformation: String,
        #[source]
        source: CipherError,
    },
}

/// Failures raised by the underlying RSA cipher.
///
/// These never reach callers directly: `cipher::execute` wraps them into
/// [`KeyWrapError::Security`].
#[derive(Debug, thiserror::Error)]
pub enum CipherError {
    #[error("Unsupported cipher transformation: [{0}]")]
    NoSuchAlgorithm(String),
    #[error("Unsupported padding: [{0}]")]
    NoSuchPadding(String),
    #[error("Invalid algorithm parameters: {0}")]
    InvalidAlgorithmParameter(&'static str),
    #[error("Invalid key: {0}")]
    InvalidKey(&'static str),
    #[error("RSA operation failed: {0}")]
    Rsa(#[from] rsa::Error),
    #[error("Unable to decode unwrapped private key: {0}")]
    Pkcs8(#[from] rsa::pkcs8::Error),
    #[error("Unable to decode unwrapped public key: {0}")]
    Spki(#[from] rsa::pkcs8::spki::Error),
}

//! RSA key management for JSON Web Encryption.
//!
//! Implements the `RSA1_5`, `RSA-OAEP` and `RSA-OAEP-256` algorithms, which
//! wrap a freshly generated Content Encryption Key with the recipient's RSA
//! public key and unwrap it again with the matching private key.
//!
//! ```ignore
//! use jwe_rsa_kw::prelude::*;
//!
//! let alg = RsaKeyAlgorithm::rsa_oaep_256();
//! let enc = ContentEncryption::A256GCM;
//! let result = alg.encrypt(EncryptionKeyRequest::new(&public_key, &enc))?;
//! let cek = alg.decrypt(DecryptionKeyRequest::new(&private_key, result.payload()))?;
//! assert_eq!(&cek, result.key());
//! ```

#![forbid(unsafe_code)]

pub mod algorithms;
pub mod cipher;
pub mod common;
pub mod error;
pub mod keys;
pub mod params;
pub mod request;
pub mod rsa_keys;


pub use rsa;
pub use serde;

pub mod prelude {
    pub use crate::algorithms::*;
    pub use crate::common::*;
    pub use crate::error::Error;
    pub use crate::keys::*;
    pub use crate::params::*;
    pub use crate::request::*;
    pub use crate::rsa_keys::*;
    pub use serde::{Deserialize, Serialize};
}

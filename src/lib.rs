//! # Crypto-Primer: calling vetted cryptography, step by step
//!
//! `crypto-primer` walks through the everyday building blocks of applied
//! cryptography by calling mature RustCrypto implementations:
//!
//! - **`symmetric`**: AES-256-GCM authenticated encryption.
//! - **`asymmetric`**: RSA key generation, RSA-OAEP encryption, PEM import/export.
//! - **`hashing`**: SHA-256 / SHA-384 / SHA-512 digests.
//! - **`signature::textbook`**: RSA signing by hand, `H(m)^D mod N`, to show the
//!   arithmetic underneath. It has no padding and is **not** a secure signature scheme.
//! - **`storage`**: the file I/O used by the walkthrough (PEM key files, sealed messages).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use crypto_primer::prelude::*;
//!
//! fn main() -> Result<(), Error> {
//!     let keys = TextbookKeyPair::placeholder();
//!     let signature = sign(b"A message for signing", keys.private());
//!
//!     assert!(verify(b"A message for signing", &signature, keys.public()));
//!     assert!(!verify(b"A different message", &signature, keys.public()));
//!     println!("signature = {}", signature);
//!     Ok(())
//! }
//! ```

pub mod asymmetric;
pub mod common;
pub mod hashing;
pub mod signature;
pub mod storage;
pub mod symmetric;

pub use common::errors::Error;

/// 常用类型与特征的集合
pub mod prelude {
    pub use crate::asymmetric::systems::traditional::rsa::{
        RsaCryptoSystem, RsaPrivateKeyWrapper, RsaPublicKeyWrapper,
    };
    pub use crate::asymmetric::traits::AsymmetricCryptographicSystem;
    pub use crate::common::config::{ConfigFile, CryptoConfig, StorageConfig};
    pub use crate::common::errors::Error;
    pub use crate::hashing::HashAlgorithm;
    pub use crate::signature::textbook::{
        TextbookKeyPair, TextbookPrivateKey, TextbookPublicKey, TextbookSignature, sign, sign_with,
        verify, verify_with,
    };
    pub use crate::storage::{KeyStore, read_sealed_message, write_sealed_message};
    pub use crate::symmetric::systems::aes_gcm::{AesGcmKey, AesGcmSystem, SealedMessage};
    pub use crate::symmetric::traits::SymmetricCryptographicSystem;
}

/// The version of the `crypto-primer` crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

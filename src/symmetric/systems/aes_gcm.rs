//! AES-GCM 对称加密实现
//!
//! 密文格式：`nonce (12 字节) || tag (16 字节) || ciphertext`，
//! 与演示中写入文件的顺序一致。
use crate::common::config::CryptoConfig;
use crate::common::utils::ZeroizingVec;
use crate::symmetric::traits::SymmetricCryptographicSystem;
use aes_gcm::aead::{AeadInPlace, Error as AeadError, KeyInit};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce, Tag};
use base64::{Engine, engine::general_purpose};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use thiserror::Error;

pub const KEY_SIZE: usize = 32;
pub const NONCE_SIZE: usize = 12;
pub const TAG_SIZE: usize = 16; // AES-GCM's tag is 16 bytes

/// AES-GCM 系统的独立错误类型
#[derive(Error, Debug)]
pub enum AesGcmSystemError {
    #[error("Key generation failed: {0}")]
    KeyGeneration(#[from] rand_core::OsError),

    #[error("Invalid key size: expected {expected}, got {actual}")]
    InvalidKeySize { expected: usize, actual: usize },

    #[error("Encryption failed: {0}")]
    EncryptionFailed(#[from] AeadError),

    #[error("Decryption failed")]
    DecryptionFailed,

    #[error("Ciphertext is malformed or truncated: {0}")]
    MalformedCiphertext(String),

    #[error("Base64 decoding failed: {0}")]
    Base64Decode(#[from] base64::DecodeError),
}

/// AES-GCM 对称加密系统
#[derive(Debug)]
pub struct AesGcmSystem;

/// AES-256 密钥，离开作用域时自动擦除
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct AesGcmKey(ZeroizingVec);

impl AesGcmKey {
    /// 从原始字节构造密钥，长度必须为 32 字节
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AesGcmSystemError> {
        if bytes.len() != KEY_SIZE {
            return Err(AesGcmSystemError::InvalidKeySize {
                expected: KEY_SIZE,
                actual: bytes.len(),
            });
        }
        Ok(Self(ZeroizingVec::new(bytes)))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

/// 一次加密的完整输出：随机数、认证标签和密文
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SealedMessage(Vec<u8>);

impl SealedMessage {
    fn from_parts(nonce: &[u8], tag: &[u8], ciphertext: &[u8]) -> Self {
        let mut bytes = Vec::with_capacity(NONCE_SIZE + TAG_SIZE + ciphertext.len());
        bytes.extend_from_slice(nonce);
        bytes.extend_from_slice(tag);
        bytes.extend_from_slice(ciphertext);
        Self(bytes)
    }

    /// 解析 `nonce || tag || ciphertext` 格式的字节串
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AesGcmSystemError> {
        if bytes.len() < NONCE_SIZE + TAG_SIZE {
            return Err(AesGcmSystemError::MalformedCiphertext(format!(
                "expected at least {} bytes, got {}",
                NONCE_SIZE + TAG_SIZE,
                bytes.len()
            )));
        }
        Ok(Self(bytes.to_vec()))
    }

    pub fn nonce(&self) -> &[u8] {
        &self.0[..NONCE_SIZE]
    }

    pub fn tag(&self) -> &[u8] {
        &self.0[NONCE_SIZE..NONCE_SIZE + TAG_SIZE]
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.0[NONCE_SIZE + TAG_SIZE..]
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for SealedMessage {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

fn cipher_for(key: &AesGcmKey) -> Result<Aes256Gcm, AesGcmSystemError> {
    Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| AesGcmSystemError::InvalidKeySize {
        expected: KEY_SIZE,
        actual: key.as_bytes().len(),
    })
}

impl SymmetricCryptographicSystem for AesGcmSystem {
    const KEY_SIZE: usize = KEY_SIZE;
    type CiphertextOutput = SealedMessage;
    type Key = AesGcmKey;
    type Error = AesGcmSystemError;

    fn generate_key(_config: &CryptoConfig) -> Result<Self::Key, Self::Error> {
        let mut key_bytes = ZeroizingVec::new(vec![0u8; Self::KEY_SIZE]);
        use rand_core::{OsRng, TryRngCore};
        OsRng.try_fill_bytes(&mut key_bytes.0)?;
        Ok(AesGcmKey(key_bytes))
    }

    fn encrypt(
        key: &Self::Key,
        plaintext: &[u8],
        additional_data: Option<&[u8]>,
    ) -> Result<Self::CiphertextOutput, Self::Error> {
        let cipher = cipher_for(key)?;
        use aes_gcm::aead::OsRng;
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

        let mut buffer = plaintext.to_vec();
        let tag = cipher.encrypt_in_place_detached(
            &nonce,
            additional_data.unwrap_or(&[]),
            &mut buffer,
        )?;

        tracing::debug!(plaintext_len = plaintext.len(), "sealed message with AES-256-GCM");
        Ok(SealedMessage::from_parts(nonce.as_slice(), tag.as_slice(), &buffer))
    }

    fn decrypt(
        key: &Self::Key,
        ciphertext: &[u8],
        additional_data: Option<&[u8]>,
    ) -> Result<Vec<u8>, Self::Error> {
        let sealed = SealedMessage::from_bytes(ciphertext)?;
        let cipher = cipher_for(key)?;

        let nonce = Nonce::from_slice(sealed.nonce());
        let tag = Tag::from_slice(sealed.tag());

        let mut buffer = sealed.ciphertext().to_vec();
        cipher
            .decrypt_in_place_detached(nonce, additional_data.unwrap_or(&[]), &mut buffer, tag)
            .map_err(|_| AesGcmSystemError::DecryptionFailed)?;

        Ok(buffer)
    }

    fn export_key(key: &Self::Key) -> Result<String, Self::Error> {
        Ok(general_purpose::STANDARD.encode(key.as_bytes()))
    }

    fn import_key(encoded_key: &str) -> Result<Self::Key, Self::Error> {
        let key_bytes = ZeroizingVec::new(general_purpose::STANDARD.decode(encoded_key.trim())?);
        AesGcmKey::from_bytes(&key_bytes)
    }
}

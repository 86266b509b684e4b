//! `RsaCryptoSystem` 提供了基于 RSA-OAEP (SHA-256) 的非对称加解密功能。
//!
//! 公钥以 SPKI DER、私钥以 PKCS#8 DER 形式保存在包装器中，
//! 导入导出时使用 PEM（LF 换行）。
//! 教科书式签名所需的 (N, E, D) 也从这里生成的私钥中提取。

use crate::asymmetric::traits::AsymmetricCryptographicSystem;
use crate::common::config::CryptoConfig;
use crate::common::utils::ZeroizingVec;
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::rand_core::OsRng as RsaOsRng;
use rsa::traits::PublicKeyParts;
use rsa::{BigUint, Oaep, RsaPrivateKey, RsaPublicKey};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use thiserror::Error;

/// OAEP(SHA-256) 的填充开销：2 * hLen + 2
const OAEP_SHA256_OVERHEAD: usize = 2 * 32 + 2;

#[derive(Error, Debug)]
pub enum RsaSystemError {
    #[error("RSA key generation failed: {0}")]
    KeyGeneration(#[source] rsa::Error),

    #[error("Failed to parse RSA key: {0}")]
    KeyParse(String),

    #[error("Failed to export RSA key: {0}")]
    KeyExport(String),

    #[error("Public exponent {0} is not supported")]
    InvalidExponent(u64),

    #[error("Plaintext too long for RSA-OAEP: max {max} bytes, got {actual}")]
    PlaintextTooLong { max: usize, actual: usize },

    #[error("RSA encryption failed: {0}")]
    Encryption(#[source] rsa::Error),

    #[error("RSA decryption failed")]
    Decryption(#[source] rsa::Error),
}

/// RSA公钥包装器，内部为 SPKI DER 编码
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaPublicKeyWrapper(pub Vec<u8>);

impl RsaPublicKeyWrapper {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// 解析为 `rsa` crate 的公钥
    pub fn to_rsa_key(&self) -> Result<RsaPublicKey, RsaSystemError> {
        RsaPublicKey::from_public_key_der(&self.0)
            .map_err(|e| RsaSystemError::KeyParse(format!("解析RSA公钥失败: {}", e)))
    }

    /// 模数位数
    pub fn modulus_bits(&self) -> Result<usize, RsaSystemError> {
        Ok(self.to_rsa_key()?.n().bits())
    }
}

/// RSA私钥包装器，内部为 PKCS#8 DER 编码，提供安全擦除
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsaPrivateKeyWrapper(pub ZeroizingVec);

impl RsaPrivateKeyWrapper {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// 解析为 `rsa` crate 的私钥
    pub fn to_rsa_key(&self) -> Result<RsaPrivateKey, RsaSystemError> {
        RsaPrivateKey::from_pkcs8_der(&self.0)
            .map_err(|e| RsaSystemError::KeyParse(format!("解析RSA私钥失败: {}", e)))
    }

    /// 从私钥推导出对应的公钥
    pub fn public_key(&self) -> Result<RsaPublicKeyWrapper, RsaSystemError> {
        let public_key = RsaPublicKey::from(&self.to_rsa_key()?);
        public_key_to_wrapper(&public_key)
    }
}

fn public_key_to_wrapper(public_key: &RsaPublicKey) -> Result<RsaPublicKeyWrapper, RsaSystemError> {
    let public_der = public_key
        .to_public_key_der()
        .map_err(|e| RsaSystemError::KeyExport(format!("导出RSA公钥DER失败: {}", e)))?;
    Ok(RsaPublicKeyWrapper(public_der.as_bytes().to_vec()))
}

fn private_key_to_wrapper(private_key: &RsaPrivateKey) -> Result<RsaPrivateKeyWrapper, RsaSystemError> {
    let private_der = private_key
        .to_pkcs8_der()
        .map_err(|e| RsaSystemError::KeyExport(format!("导出RSA私钥DER失败: {}", e)))?;
    Ok(RsaPrivateKeyWrapper(ZeroizingVec::new(private_der.as_bytes())))
}

fn oaep_padding(label: Option<&str>) -> Oaep {
    match label {
        Some(label) => Oaep::new_with_label::<Sha256, _>(label),
        None => Oaep::new::<Sha256>(),
    }
}

/// RSA加密系统实现
///
/// 提供 RSA-OAEP(SHA-256) 加密和解密功能
pub struct RsaCryptoSystem;

impl RsaCryptoSystem {
    /// 给定公钥下单次 OAEP 加密能容纳的最大明文长度
    pub fn max_plaintext_len(public_key: &RsaPublicKeyWrapper) -> Result<usize, RsaSystemError> {
        let size = public_key.to_rsa_key()?.size();
        Ok(size.saturating_sub(OAEP_SHA256_OVERHEAD))
    }

    /// 按配置生成 `rsa` crate 原生私钥
    pub(crate) fn generate_rsa_private_key(
        config: &CryptoConfig,
    ) -> Result<RsaPrivateKey, RsaSystemError> {
        // 指数必须是大于 1 的奇数
        if config.public_exponent < 3 || config.public_exponent % 2 == 0 {
            return Err(RsaSystemError::InvalidExponent(config.public_exponent));
        }
        let exponent = BigUint::from(config.public_exponent);
        let mut rng = RsaOsRng;
        let private_key = RsaPrivateKey::new_with_exp(&mut rng, config.rsa_key_bits, &exponent)
            .map_err(RsaSystemError::KeyGeneration)?;
        tracing::info!(bits = config.rsa_key_bits, "generated RSA key pair");
        Ok(private_key)
    }
}

impl AsymmetricCryptographicSystem for RsaCryptoSystem {
    type PublicKey = RsaPublicKeyWrapper;
    type PrivateKey = RsaPrivateKeyWrapper;
    type Error = RsaSystemError;

    fn generate_keypair(
        config: &CryptoConfig,
    ) -> Result<(Self::PublicKey, Self::PrivateKey), Self::Error> {
        let private_key = Self::generate_rsa_private_key(config)?;
        let public_key = RsaPublicKey::from(&private_key);

        Ok((
            public_key_to_wrapper(&public_key)?,
            private_key_to_wrapper(&private_key)?,
        ))
    }

    fn encrypt(
        public_key: &Self::PublicKey,
        plaintext: &[u8],
        label: Option<&str>,
    ) -> Result<Vec<u8>, Self::Error> {
        let public_key = public_key.to_rsa_key()?;

        let max = public_key.size().saturating_sub(OAEP_SHA256_OVERHEAD);
        if plaintext.len() > max {
            return Err(RsaSystemError::PlaintextTooLong {
                max,
                actual: plaintext.len(),
            });
        }

        let mut rng = RsaOsRng;
        public_key
            .encrypt(&mut rng, oaep_padding(label), plaintext)
            .map_err(RsaSystemError::Encryption)
    }

    fn decrypt(
        private_key: &Self::PrivateKey,
        ciphertext: &[u8],
        label: Option<&str>,
    ) -> Result<Vec<u8>, Self::Error> {
        let private_key = private_key.to_rsa_key()?;

        private_key
            .decrypt(oaep_padding(label), ciphertext)
            .map_err(RsaSystemError::Decryption)
    }

    fn export_public_key(public_key: &Self::PublicKey) -> Result<String, Self::Error> {
        public_key
            .to_rsa_key()?
            .to_public_key_pem(LineEnding::LF)
            .map_err(|e| RsaSystemError::KeyExport(format!("RSA公钥导出失败: {}", e)))
    }

    fn export_private_key(private_key: &Self::PrivateKey) -> Result<String, Self::Error> {
        let pem = private_key
            .to_rsa_key()?
            .to_pkcs8_pem(LineEnding::LF)
            .map_err(|e| RsaSystemError::KeyExport(format!("RSA私钥导出失败: {}", e)))?
            .to_string();
        Ok(pem)
    }

    fn import_public_key(key_data: &str) -> Result<Self::PublicKey, Self::Error> {
        let public_key = RsaPublicKey::from_public_key_pem(key_data)
            .map_err(|e| RsaSystemError::KeyParse(format!("导入RSA公钥失败: {}", e)))?;
        public_key_to_wrapper(&public_key)
    }

    fn import_private_key(key_data: &str) -> Result<Self::PrivateKey, Self::Error> {
        let private_key = RsaPrivateKey::from_pkcs8_pem(key_data)
            .map_err(|e| RsaSystemError::KeyParse(format!("导入RSA私钥失败: {}", e)))?;
        private_key_to_wrapper(&private_key)
    }
}

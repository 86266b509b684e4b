//! 教科书式 RSA 签名 / Textbook RSA signatures.
//!
//! 签名：`s = H(m)^D mod N`；验签：`s^E mod N == H(m)`，其中 `H(m)` 是消息摘要
//! 按大端序解释得到的无符号整数，默认摘要算法为 SHA-512。
//!
//! This is an illustration of the RSA arithmetic only. There is no padding
//! scheme, no blinding and no constant-time exponentiation, and keys are not
//! validated beyond rejecting a zero modulus.
//!
//! 中文: 当 `H(m) >= N` 时运算在模 N 下依然有定义，但恢复出的值必然小于 N，
//! 因此签名无法通过验证。这是无填充签名的已知缺陷，本模块只通过
//! `warn` 日志和 [`digest_exceeds_modulus`] 标记它，不做修正。

use crate::asymmetric::systems::traditional::rsa::{RsaCryptoSystem, RsaPrivateKeyWrapper};
use crate::common::config::CryptoConfig;
use crate::hashing::{self, HashAlgorithm};
use crate::signature::errors::SignatureError;
use rsa::BigUint;
use rsa::traits::{PrivateKeyParts, PublicKeyParts};
use std::fmt;
use zeroize::Zeroize;

/// 默认摘要算法（512 位）
pub const DEFAULT_HASH: HashAlgorithm = HashAlgorithm::Sha512;

// 固定的 1024 位演示密钥，仅用于可复现的测试和演示
const PLACEHOLDER_N: [u8; 128] = [
    0xba, 0x55, 0xac, 0xeb, 0x34, 0x8c, 0x8a, 0x5f, 0x1c, 0x26, 0x41, 0x7f, 0xd7, 0x2d, 0x21, 0x43,
    0xf6, 0xc9, 0xab, 0x6c, 0x17, 0x2a, 0xb4, 0x9d, 0x93, 0xaf, 0xda, 0xf9, 0xba, 0xb9, 0xfc, 0x57,
    0xbd, 0x64, 0xe3, 0xcf, 0x47, 0x7a, 0x69, 0x7c, 0x47, 0xde, 0x3e, 0x89, 0x75, 0x23, 0x33, 0x7e,
    0xd4, 0x67, 0xd2, 0x35, 0x55, 0x4a, 0xd1, 0xd1, 0x22, 0xcc, 0x93, 0xee, 0xd9, 0x4c, 0xd3, 0xf6,
    0x9d, 0xc7, 0x9d, 0xb2, 0x51, 0xed, 0x32, 0xa6, 0x1e, 0x1c, 0xa6, 0x15, 0x5e, 0x23, 0x98, 0xb3,
    0x4c, 0x17, 0x36, 0x18, 0x07, 0xb4, 0xed, 0xa2, 0x82, 0x08, 0x8f, 0x00, 0x26, 0x3e, 0xe6, 0x36,
    0xd7, 0xa5, 0x84, 0x59, 0x37, 0x44, 0x60, 0x78, 0x9e, 0xc5, 0xa6, 0x7a, 0xfb, 0xb2, 0x57, 0x3b,
    0x2d, 0x2b, 0x75, 0x5f, 0xc8, 0x6f, 0x97, 0xc8, 0x8d, 0x58, 0x6e, 0x05, 0x82, 0xc1, 0x2f, 0x23,
];
const PLACEHOLDER_D: [u8; 128] = [
    0x33, 0xc0, 0x7b, 0xe8, 0x4f, 0x8e, 0x01, 0x18, 0x6d, 0x5f, 0x0a, 0xae, 0x10, 0xfb, 0x4d, 0xd3,
    0xec, 0x85, 0x12, 0x81, 0x50, 0xe5, 0xe1, 0x88, 0x2a, 0x6e, 0x9b, 0x28, 0xe4, 0xfd, 0xa6, 0xe2,
    0x4f, 0x8d, 0xe7, 0xdf, 0xb8, 0x00, 0x7d, 0xaf, 0xb0, 0xde, 0x3f, 0x0c, 0x3a, 0x66, 0x6e, 0x74,
    0xf9, 0x55, 0x64, 0x82, 0xbf, 0x8f, 0xaa, 0x3a, 0xa5, 0xa9, 0xa0, 0x24, 0xa4, 0x61, 0xbc, 0x34,
    0xb7, 0x43, 0x07, 0x09, 0x1c, 0x85, 0xe7, 0x36, 0x9b, 0x10, 0xff, 0x48, 0x41, 0xf0, 0x1f, 0xe7,
    0xc4, 0x6e, 0xba, 0x32, 0x20, 0xe4, 0xc3, 0xb2, 0x90, 0xda, 0x55, 0x6c, 0xc4, 0x08, 0xb1, 0x8c,
    0xf2, 0x9a, 0x46, 0x1c, 0x46, 0x45, 0x2d, 0xd4, 0xff, 0x91, 0x4d, 0xf2, 0x11, 0x5a, 0xea, 0xd6,
    0xf4, 0x03, 0xb2, 0x90, 0xc9, 0xad, 0x2c, 0x6a, 0x26, 0xaa, 0x57, 0x89, 0xcc, 0x00, 0x9a, 0xa1,
];
const PLACEHOLDER_E: u32 = 65537;

/// 公钥 (N, E)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextbookPublicKey {
    n: BigUint,
    e: BigUint,
}

impl TextbookPublicKey {
    pub fn new(n: BigUint, e: BigUint) -> Result<Self, SignatureError> {
        if n.bits() == 0 {
            return Err(SignatureError::ZeroModulus);
        }
        Ok(Self { n, e })
    }

    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    pub fn exponent(&self) -> &BigUint {
        &self.e
    }

    pub fn modulus_bits(&self) -> usize {
        self.n.bits()
    }

    /// `value^E mod N`
    pub fn recover_raw(&self, value: &BigUint) -> BigUint {
        value.modpow(&self.e, &self.n)
    }
}

/// 私钥 (N, D)，D 在释放时被擦除
#[derive(Clone, PartialEq, Eq)]
pub struct TextbookPrivateKey {
    n: BigUint,
    d: BigUint,
}

impl TextbookPrivateKey {
    pub fn new(n: BigUint, d: BigUint) -> Result<Self, SignatureError> {
        if n.bits() == 0 {
            return Err(SignatureError::ZeroModulus);
        }
        Ok(Self { n, d })
    }

    pub fn modulus(&self) -> &BigUint {
        &self.n
    }

    pub fn exponent(&self) -> &BigUint {
        &self.d
    }

    pub fn modulus_bits(&self) -> usize {
        self.n.bits()
    }

    /// `value^D mod N`
    pub fn sign_raw(&self, value: &BigUint) -> BigUint {
        value.modpow(&self.d, &self.n)
    }
}

impl fmt::Debug for TextbookPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextbookPrivateKey")
            .field("n_bits", &self.n.bits())
            .field("d", &"[REDACTED]")
            .finish()
    }
}

impl Drop for TextbookPrivateKey {
    fn drop(&mut self) {
        self.d.zeroize();
    }
}

/// 完整的 (N, E, D) 密钥对
#[derive(Clone, Debug)]
pub struct TextbookKeyPair {
    public: TextbookPublicKey,
    private: TextbookPrivateKey,
}

impl TextbookKeyPair {
    /// 直接由三个整数构造。不检查 D 是否为 E 的模逆。
    pub fn from_components(n: BigUint, e: BigUint, d: BigUint) -> Result<Self, SignatureError> {
        Ok(Self {
            public: TextbookPublicKey::new(n.clone(), e)?,
            private: TextbookPrivateKey::new(n, d)?,
        })
    }

    /// 用 `rsa` crate 的生成器产生新密钥，再取出 (N, E, D)
    pub fn generate(config: &CryptoConfig) -> Result<Self, SignatureError> {
        let private_key = RsaCryptoSystem::generate_rsa_private_key(config)?;
        Self::from_components(
            private_key.n().clone(),
            private_key.e().clone(),
            private_key.d().clone(),
        )
    }

    /// 从 `asymmetric` 模块生成的 PKCS#8 私钥中提取 (N, E, D)
    pub fn from_rsa_private_key(private_key: &RsaPrivateKeyWrapper) -> Result<Self, SignatureError> {
        let private_key = private_key.to_rsa_key()?;
        Self::from_components(
            private_key.n().clone(),
            private_key.e().clone(),
            private_key.d().clone(),
        )
    }

    /// 固定的 1024 位演示密钥（E = 65537）。
    ///
    /// 模数大于 512 位，SHA-512 摘要总能落在 [0, N) 内。
    /// 私钥是公开的，只能用于测试和演示。
    pub fn placeholder() -> Self {
        let n = BigUint::from_bytes_be(&PLACEHOLDER_N);
        let d = BigUint::from_bytes_be(&PLACEHOLDER_D);
        Self {
            public: TextbookPublicKey {
                n: n.clone(),
                e: BigUint::from(PLACEHOLDER_E),
            },
            private: TextbookPrivateKey { n, d },
        }
    }

    pub fn public(&self) -> &TextbookPublicKey {
        &self.public
    }

    pub fn private(&self) -> &TextbookPrivateKey {
        &self.private
    }
}

/// 签名值：一个无符号整数。
///
/// 正常签名落在 `[0, N)` 内，但解析（[`from_hex`](Self::from_hex)、
/// [`from_bytes_be`](Self::from_bytes_be)）不检查这一范围：`s + N` 与 `s`
/// 同样能通过 [`verify`]。这是教科书式 RSA 的可延展性，这里不做修正。
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TextbookSignature(BigUint);

impl TextbookSignature {
    pub fn from_biguint(value: BigUint) -> Self {
        Self(value)
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    /// 小写十六进制，无前导零、无 `0x` 前缀
    pub fn to_hex(&self) -> String {
        self.0.to_str_radix(16)
    }

    /// 解析十六进制，允许 `0x` 前缀与大写字母
    pub fn from_hex(hex: &str) -> Result<Self, SignatureError> {
        let trimmed = hex.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        BigUint::parse_bytes(digits.as_bytes(), 16)
            .map(Self)
            .ok_or_else(|| SignatureError::InvalidHex(hex.to_string()))
    }

    pub fn to_bytes_be(&self) -> Vec<u8> {
        self.0.to_bytes_be()
    }

    pub fn from_bytes_be(bytes: &[u8]) -> Self {
        Self(BigUint::from_bytes_be(bytes))
    }
}

impl fmt::Display for TextbookSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// 摘要字节按大端序解释得到的整数
pub fn digest_to_integer(hash: HashAlgorithm, message: &[u8]) -> BigUint {
    BigUint::from_bytes_be(&hashing::digest(hash, message))
}

/// 摘要整数是否不小于模数。为真时生成的签名无法通过验证。
pub fn digest_exceeds_modulus(hash: HashAlgorithm, message: &[u8], modulus: &BigUint) -> bool {
    digest_to_integer(hash, message) >= *modulus
}

/// 使用 SHA-512 摘要签名
pub fn sign(message: &[u8], key: &TextbookPrivateKey) -> TextbookSignature {
    sign_with(DEFAULT_HASH, message, key)
}

/// 使用 SHA-512 摘要验签
pub fn verify(message: &[u8], signature: &TextbookSignature, key: &TextbookPublicKey) -> bool {
    verify_with(DEFAULT_HASH, message, signature, key)
}

/// `signature = H(message)^D mod N`
pub fn sign_with(hash: HashAlgorithm, message: &[u8], key: &TextbookPrivateKey) -> TextbookSignature {
    let digest = digest_to_integer(hash, message);
    if digest >= key.n {
        tracing::warn!(
            %hash,
            digest_bits = digest.bits(),
            modulus_bits = key.n.bits(),
            "digest is not smaller than the modulus; textbook signature will not verify"
        );
    }
    tracing::debug!(%hash, modulus_bits = key.n.bits(), "textbook RSA sign");
    TextbookSignature(key.sign_raw(&digest))
}

/// `signature^E mod N == H(message)`，不匹配时返回 `false`
pub fn verify_with(
    hash: HashAlgorithm,
    message: &[u8],
    signature: &TextbookSignature,
    key: &TextbookPublicKey,
) -> bool {
    let digest = digest_to_integer(hash, message);
    let recovered = key.recover_raw(&signature.0);
    let valid = recovered == digest;
    tracing::debug!(%hash, modulus_bits = key.n.bits(), valid, "textbook RSA verify");
    valid
}

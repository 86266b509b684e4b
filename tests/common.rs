//!
//! 集成测试的通用辅助函数
//!

use crypto_primer::prelude::*;

/// 测试用配置：1024 位 RSA，保持测试快速
#[allow(dead_code)]
pub fn fast_config() -> CryptoConfig {
    CryptoConfig {
        rsa_key_bits: 1024,
        ..Default::default()
    }
}

/// 直接生成一个 RSA 密钥对，不写入磁盘
#[allow(dead_code)]
pub fn setup_rsa_keys() -> (RsaPublicKeyWrapper, RsaPrivateKeyWrapper) {
    RsaCryptoSystem::generate_keypair(&fast_config()).unwrap()
}

/// 翻转签名整数的第 `bit` 位
#[allow(dead_code)]
pub fn flip_bit(signature: &TextbookSignature, bit: usize) -> TextbookSignature {
    let mut bytes = signature.to_bytes_be();
    let index = bytes.len() - 1 - bit / 8;
    bytes[index] ^= 1 << (bit % 8);
    TextbookSignature::from_bytes_be(&bytes)
}

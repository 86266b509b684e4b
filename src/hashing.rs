//! # SHA-2 摘要
//!
//! 演示中用到的哈希函数都来自 `sha2` crate。这里只做一层很薄的封装：
//! 按 [`HashAlgorithm`] 选择算法、输出原始字节或十六进制字符串。
//!
//! 教科书式签名把摘要字节按大端序解释为一个无符号整数，
//! 对应的转换在 [`crate::signature::textbook::digest_to_integer`] 中。

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256, Sha384, Sha512};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 支持的摘要算法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Sha256,
    Sha384,
    Sha512,
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("unknown hash algorithm: {0}")]
pub struct UnknownHashAlgorithm(pub String);

impl HashAlgorithm {
    /// 摘要长度（字节）
    pub const fn output_size(self) -> usize {
        match self {
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = UnknownHashAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "").as_str() {
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha384" => Ok(HashAlgorithm::Sha384),
            "sha512" => Ok(HashAlgorithm::Sha512),
            _ => Err(UnknownHashAlgorithm(s.to_string())),
        }
    }
}

/// 计算 `data` 的摘要
pub fn digest(algorithm: HashAlgorithm, data: &[u8]) -> Vec<u8> {
    match algorithm {
        HashAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        HashAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
        HashAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
    }
}

/// 计算摘要并以小写十六进制返回
pub fn digest_hex(algorithm: HashAlgorithm, data: &[u8]) -> String {
    hex::encode(digest(algorithm, data))
}

pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut output = [0u8; 32];
    output.copy_from_slice(&Sha256::digest(data));
    output
}

pub fn sha512(data: &[u8]) -> [u8; 64] {
    let mut output = [0u8; 64];
    output.copy_from_slice(&Sha512::digest(data));
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSAGE: &[u8] = b"A message for signing";

    #[test]
    fn test_known_digests() {
        assert_eq!(
            digest_hex(HashAlgorithm::Sha256, MESSAGE),
            "47f53245cd05a2b3e811ad6515000b44604b947a57d441b02125b04f4a16bb74"
        );
        assert_eq!(
            digest_hex(HashAlgorithm::Sha512, MESSAGE),
            "831ce81db1d7c2929d10f0de2fca1ee5fea3374cd17194841a36f5ea8ce29184\
             e786be771e55746190c33a3d290beccbecd6e4fc08abacfe2c95793592276238"
        );
    }

    #[test]
    fn test_empty_input_sha256() {
        assert_eq!(
            digest_hex(HashAlgorithm::Sha256, b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_output_sizes_match() {
        for alg in [
            HashAlgorithm::Sha256,
            HashAlgorithm::Sha384,
            HashAlgorithm::Sha512,
        ] {
            assert_eq!(digest(alg, b"abc").len(), alg.output_size());
        }
        assert_eq!(sha256(b"abc").to_vec(), digest(HashAlgorithm::Sha256, b"abc"));
        assert_eq!(sha512(b"abc").to_vec(), digest(HashAlgorithm::Sha512, b"abc"));
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!("SHA-512".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha512));
        assert_eq!("sha384".parse::<HashAlgorithm>(), Ok(HashAlgorithm::Sha384));
        assert!("md5".parse::<HashAlgorithm>().is_err());
        assert_eq!(HashAlgorithm::Sha256.to_string(), "sha256");
    }

    #[test]
    fn test_serde_lowercase_names() {
        let json = serde_json::to_string(&HashAlgorithm::Sha512).unwrap();
        assert_eq!(json, "\"sha512\"");
        let parsed: HashAlgorithm = serde_json::from_str("\"sha256\"").unwrap();
        assert_eq!(parsed, HashAlgorithm::Sha256);
    }
}

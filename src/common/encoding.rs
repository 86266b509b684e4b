//! Base64 / 十六进制编码辅助函数。
//!
//! 中文: 演示中需要把二进制数据（密钥、密文、摘要）转成可打印文本，
//! 这里集中封装 `base64` 与 `hex` 两个 crate 的调用。

use base64::{Engine, engine::general_purpose};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("Base64 decoding failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Hex decoding failed: {0}")]
    Hex(#[from] hex::FromHexError),
}

/// 标准 Base64（带填充）编码
pub fn to_base64(data: &[u8]) -> String {
    general_purpose::STANDARD.encode(data)
}

/// 标准 Base64（带填充）解码
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, EncodingError> {
    Ok(general_purpose::STANDARD.decode(encoded.trim())?)
}

/// 小写十六进制编码
pub fn to_hex(data: &[u8]) -> String {
    hex::encode(data)
}

/// 十六进制解码，大小写均可
pub fn from_hex(encoded: &str) -> Result<Vec<u8>, EncodingError> {
    Ok(hex::decode(encoded.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_known_value() {
        assert_eq!(to_base64(b"hello"), "aGVsbG8=");
        assert_eq!(from_base64("aGVsbG8=").unwrap(), b"hello");
        // 首尾空白（例如从文件读入的换行）会被忽略
        assert_eq!(from_base64("aGVsbG8=\n").unwrap(), b"hello");
    }

    #[test]
    fn test_hex_known_value() {
        assert_eq!(to_hex(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
        assert_eq!(from_hex("DEADBEEF").unwrap(), vec![0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn test_invalid_input_fails() {
        assert!(matches!(
            from_base64("not base64!"),
            Err(EncodingError::Base64(_))
        ));
        assert!(matches!(from_hex("abc"), Err(EncodingError::Hex(_))));
        assert!(matches!(from_hex("zz"), Err(EncodingError::Hex(_))));
    }
}

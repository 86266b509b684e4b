use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// 自动清零的字节向量，用于私钥、对称密钥等敏感数据
///
/// 离开作用域时内存会被擦除。`Debug` 输出只显示长度，不泄露内容。
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct ZeroizingVec(#[serde(with = "serde_bytes")] pub Vec<u8>);

impl ZeroizingVec {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }
}

impl std::fmt::Debug for ZeroizingVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ZeroizingVec([REDACTED; {}])", self.0.len())
    }
}

impl std::ops::Deref for ZeroizingVec {
    type Target = [u8];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for ZeroizingVec {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeroizing_vec_deref() {
        let secret = ZeroizingVec::new(b"sensitive information".to_vec());
        assert_eq!(&*secret, b"sensitive information");
        assert_eq!(secret.as_ref().len(), 21);
    }

    #[test]
    fn test_zeroizing_vec_debug_redacts() {
        let secret = ZeroizingVec::new(vec![0x41; 8]);
        let rendered = format!("{:?}", secret);
        assert_eq!(rendered, "ZeroizingVec([REDACTED; 8])");
        assert!(!rendered.contains("65"));
    }

    #[test]
    fn test_zeroize_clears_bytes() {
        let mut secret = ZeroizingVec::new(vec![1, 2, 3]);
        secret.zeroize();
        // Vec::zeroize 会清零并截断
        assert!(secret.0.is_empty());
    }
}

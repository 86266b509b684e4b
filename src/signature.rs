//! 签名模块
//!
//! 只包含一种“教科书式” RSA 签名：对摘要做模幂运算，不带任何填充。
//! 它用于演示 RSA 的数学本身，不是可用于生产的签名方案。

pub mod errors;
pub mod textbook;

#[cfg(feature = "parallel")]
pub mod batch;

pub use self::errors::SignatureError;
pub use self::textbook::{
    TextbookKeyPair, TextbookPrivateKey, TextbookPublicKey, TextbookSignature, sign, sign_with,
    verify, verify_with,
};

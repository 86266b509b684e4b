//! # Traditional Cryptographic Algorithm Module
//!
//! This module contains the RSA implementation used by the walkthrough.
//! It provides an interface that conforms to the `AsymmetricCryptographicSystem` trait.
//!
//! ---
//!
//! # 传统加密算法模块
//!
//! 本模块包含RSA算法的实现，提供符合 `AsymmetricCryptographicSystem` 特征的接口。

pub mod rsa;

// 重新导出RSA系统，方便其他模块调用。
pub use self::rsa::RsaCryptoSystem;

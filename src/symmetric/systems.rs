//! 对称算法实现集合

pub mod aes_gcm;

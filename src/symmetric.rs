//! 对称加密模块：AES-256-GCM 认证加密

pub mod errors;
pub mod systems;
pub mod traits;

pub use self::systems::aes_gcm::{AesGcmKey, AesGcmSystem, SealedMessage};
pub use self::traits::SymmetricCryptographicSystem;

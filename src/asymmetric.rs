//! 非对称加密模块：RSA 密钥生成、RSA-OAEP 加解密与 PEM 导入导出

pub mod errors;
pub mod systems;
pub mod traits;

pub use self::systems::traditional::RsaCryptoSystem;
pub use self::traits::AsymmetricCryptographicSystem;

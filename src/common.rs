//! 通用模块，包含配置、错误处理、编码与工具函数

pub mod config;
pub mod encoding;
pub mod errors;
pub mod utils;

pub use self::config::{ConfigFile, ConfigSource, CryptoConfig, StorageConfig};
pub use self::encoding::{from_base64, from_hex, to_base64, to_hex};
pub use self::errors::Error;
pub use self::utils::ZeroizingVec;

//!
//! # 通用配置模块
//!
//! 包含演示各步骤共享的配置结构：RSA 参数、签名摘要算法、并行度以及
//! 演示中密钥文件的落盘位置。配置可以来自内存默认值、JSON 文件或环境变量。
//!
use crate::common::errors::Error;
use crate::hashing::HashAlgorithm;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 环境变量前缀
const ENV_PREFIX: &str = "CRYPTO_PRIMER_";

/// 配置来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    /// 内存默认值
    Default,
    /// 文件
    File,
    /// 环境变量
    Environment,
}

/// 加密参数配置
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct CryptoConfig {
    /// RSA 模数位数
    #[serde(default = "default_rsa_key_bits")]
    pub rsa_key_bits: usize,
    /// RSA 公钥指数，惯例为 65537
    #[serde(default = "default_public_exponent")]
    pub public_exponent: u64,
    /// 教科书式签名使用的摘要算法
    #[serde(default = "default_signature_hash")]
    pub signature_hash: HashAlgorithm,
    /// 批量签名线程数，0 表示交给 rayon 自行决定
    #[serde(default)]
    pub parallelism: usize,
}

fn default_rsa_key_bits() -> usize {
    2048
}

fn default_public_exponent() -> u64 {
    65537
}

fn default_signature_hash() -> HashAlgorithm {
    HashAlgorithm::Sha512
}

impl Default for CryptoConfig {
    fn default() -> Self {
        Self {
            rsa_key_bits: default_rsa_key_bits(),
            public_exponent: default_public_exponent(),
            signature_hash: default_signature_hash(),
            parallelism: 0,
        }
    }
}

/// 存储配置
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct StorageConfig {
    /// 密钥文件目录
    #[serde(default = "default_key_storage_dir")]
    pub key_storage_dir: String,
    /// 私钥文件权限（Unix文件模式，如0o600）
    #[serde(default = "default_file_permissions")]
    pub file_permissions: u32,
}

fn default_key_storage_dir() -> String {
    "./keys".to_string()
}

fn default_file_permissions() -> u32 {
    0o600 // 等同于 -rw-------
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            key_storage_dir: default_key_storage_dir(),
            file_permissions: default_file_permissions(),
        }
    }
}

/// 完整配置文件
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct ConfigFile {
    /// 加密配置
    #[serde(default)]
    pub crypto: CryptoConfig,
    /// 存储配置
    #[serde(default)]
    pub storage: StorageConfig,
    /// 配置来源，不参与序列化
    #[serde(skip)]
    pub source: ConfigSource,
}

impl Default for ConfigSource {
    fn default() -> Self {
        ConfigSource::Default
    }
}

impl ConfigFile {
    /// 从 JSON 文件加载配置，缺失字段取默认值
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let mut config: ConfigFile = serde_json::from_str(&contents).map_err(|e| {
            Error::Configuration(format!("解析配置文件 {} 失败: {}", path.display(), e))
        })?;
        config.source = ConfigSource::File;
        tracing::debug!(path = %path.display(), "loaded configuration file");
        Ok(config)
    }

    /// 以默认值为基础，应用环境变量覆盖
    pub fn from_env() -> Result<Self, Error> {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.source = ConfigSource::Environment;
        Ok(config)
    }

    /// 保存配置到 JSON 文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// 用 `lookup` 提供的值覆盖配置项。
    ///
    /// 无法解析的值返回 `Error::Configuration`，而不是被静默忽略。
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", ENV_PREFIX, name));

        if let Some(value) = var("RSA_KEY_BITS") {
            self.crypto.rsa_key_bits = parse_number(&value, "RSA_KEY_BITS")?;
        }

        if let Some(value) = var("SIGNATURE_HASH") {
            self.crypto.signature_hash = value
                .parse::<HashAlgorithm>()
                .map_err(|e| Error::Configuration(format!("SIGNATURE_HASH: {}", e)))?;
        }

        if let Some(value) = var("PARALLELISM") {
            self.crypto.parallelism = parse_number(&value, "PARALLELISM")?;
        }

        if let Some(value) = var("KEY_DIR") {
            self.storage.key_storage_dir = value;
        }

        if let Some(value) = var("FILE_PERMISSIONS") {
            self.storage.file_permissions = u32::from_str_radix(value.trim_start_matches("0o"), 8)
                .map_err(|e| Error::Configuration(format!("FILE_PERMISSIONS: {}", e)))?;
        }

        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(value: &str, name: &str) -> Result<T, Error>
where
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| Error::Configuration(format!("{}: {}", name, e)))
}

//! PEM key files with a JSON manifest.
// 中文: 以 PEM 文件保存 RSA 密钥对，并附带一个 JSON 清单。

use crate::asymmetric::systems::traditional::rsa::{
    RsaCryptoSystem, RsaPrivateKeyWrapper, RsaPublicKeyWrapper,
};
use crate::asymmetric::traits::AsymmetricCryptographicSystem;
use crate::common::config::StorageConfig;
use crate::common::errors::Error;
use crate::storage::atomic_write;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Component, Path, PathBuf};
use uuid::Uuid;

pub const PUBLIC_KEY_FILE: &str = "public.pem";
pub const PRIVATE_KEY_FILE: &str = "private.pem";
pub const MANIFEST_FILE: &str = "manifest.json";

/// Metadata written next to the key files.
/// 中文: 与密钥文件一同写入的元数据。
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyManifest {
    /// Random identifier of this key pair.
    pub id: String,
    /// RFC 3339 creation time (UTC).
    pub created_at: String,
    /// Algorithm label, e.g. `RSA-2048`.
    pub algorithm: String,
    pub key_bits: usize,
    pub public_key_file: String,
    pub private_key_file: String,
}

impl KeyManifest {
    /// Parses `created_at`.
    /// 中文: 解析创建时间。
    pub fn created_at(&self) -> Result<DateTime<Utc>, Error> {
        DateTime::parse_from_rfc3339(&self.created_at)
            .map(|time| time.with_timezone(&Utc))
            .map_err(|e| Error::Format(format!("invalid created_at {:?}: {}", self.created_at, e)))
    }
}

/// A directory holding one RSA key pair.
///
/// The key material is not encrypted at rest; on Unix the private key file
/// gets restrictive permissions (`0o600` by default) and nothing more.
///
/// 中文: 保存一对 RSA 密钥的目录。私钥以明文 PEM 存放，只在 Unix 上收紧文件权限。
#[derive(Clone, Debug)]
pub struct KeyStore {
    dir: PathBuf,
    file_permissions: u32,
}

impl KeyStore {
    /// Creates a store rooted at `dir` with default permissions.
    /// 中文: 以默认权限在 `dir` 下创建存储。
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            file_permissions: StorageConfig::default().file_permissions,
        }
    }

    /// Creates a store from the storage section of the configuration.
    /// 中文: 根据存储配置创建。
    pub fn from_config(config: &StorageConfig) -> Self {
        Self {
            dir: PathBuf::from(&config.key_storage_dir),
            file_permissions: config.file_permissions,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn exists(&self) -> bool {
        self.dir.join(MANIFEST_FILE).is_file()
    }

    /// Writes both PEM files and the manifest, creating the directory if needed.
    /// An existing key pair in the same directory is replaced.
    ///
    /// 中文: 写入两个 PEM 文件和清单，必要时创建目录；已有密钥会被覆盖。
    pub fn save(
        &self,
        public_key: &RsaPublicKeyWrapper,
        private_key: &RsaPrivateKeyWrapper,
    ) -> Result<KeyManifest, Error> {
        fs::create_dir_all(&self.dir)?;

        let key_bits = public_key.modulus_bits()?;
        let public_pem = RsaCryptoSystem::export_public_key(public_key)?;
        let private_pem = RsaCryptoSystem::export_private_key(private_key)?;

        atomic_write(&self.dir.join(PUBLIC_KEY_FILE), public_pem.as_bytes(), None)?;
        atomic_write(
            &self.dir.join(PRIVATE_KEY_FILE),
            private_pem.as_bytes(),
            Some(self.file_permissions),
        )?;

        let manifest = KeyManifest {
            id: Uuid::new_v4().to_string(),
            created_at: Utc::now().to_rfc3339(),
            algorithm: format!("RSA-{}", key_bits),
            key_bits,
            public_key_file: PUBLIC_KEY_FILE.to_string(),
            private_key_file: PRIVATE_KEY_FILE.to_string(),
        };
        let manifest_json = serde_json::to_string_pretty(&manifest)?;
        atomic_write(&self.dir.join(MANIFEST_FILE), manifest_json.as_bytes(), None)?;

        tracing::info!(dir = %self.dir.display(), id = %manifest.id, key_bits, "saved RSA key pair");
        Ok(manifest)
    }

    /// Loads the manifest and both keys. The public key must belong to the private key.
    ///
    /// 中文: 读取清单与两把密钥，并检查公钥与私钥是否匹配。
    pub fn load(&self) -> Result<(KeyManifest, RsaPublicKeyWrapper, RsaPrivateKeyWrapper), Error> {
        let manifest_json = fs::read_to_string(self.dir.join(MANIFEST_FILE))?;
        let manifest: KeyManifest = serde_json::from_str(&manifest_json)?;

        let public_path = self.dir.join(plain_file_name(&manifest.public_key_file)?);
        let private_path = self.dir.join(plain_file_name(&manifest.private_key_file)?);
        let public_pem = fs::read_to_string(public_path)?;
        let private_pem = fs::read_to_string(private_path)?;

        let public_key = RsaCryptoSystem::import_public_key(&public_pem)?;
        let private_key = RsaCryptoSystem::import_private_key(&private_pem)?;

        if private_key.public_key()? != public_key {
            return Err(Error::Format(format!(
                "public key in {} does not match private key in {}",
                manifest.public_key_file, manifest.private_key_file
            )));
        }

        tracing::debug!(dir = %self.dir.display(), id = %manifest.id, "loaded RSA key pair");
        Ok((manifest, public_key, private_key))
    }
}

/// 清单中的文件名只能是存储目录下的单个普通文件名
fn plain_file_name(name: &str) -> Result<&Path, Error> {
    let path = Path::new(name);
    let mut components = path.components();
    match (components.next(), components.next()) {
        (Some(Component::Normal(_)), None) => Ok(path),
        _ => Err(Error::Format(format!(
            "manifest file name {:?} must be a plain file name",
            name
        ))),
    }
}

//! File I/O used by the walkthrough: PEM key files and sealed message files.
// 中文: 演示中的文件读写：PEM 密钥文件与加密消息文件。

pub mod key_store;
pub mod sealed_file;

pub use self::key_store::{KeyManifest, KeyStore};
pub use self::sealed_file::{read_sealed_message, write_sealed_message};

use crate::common::errors::Error;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Writes `contents` to `path` through a temporary file in the same directory.
///
/// The temporary file is created owner-only (`0o600` on Unix) and removed if
/// any step fails. When `mode` is given (Unix only) it is applied before the
/// file is persisted; otherwise the file keeps the owner-only permissions.
///
/// 中文: 先写同目录下的临时文件再原子替换；失败时临时文件随 drop 删除，不会留下密钥内容。
pub(crate) fn atomic_write(path: &Path, contents: &[u8], mode: Option<u32>) -> Result<(), Error> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut temp = NamedTempFile::new_in(parent)?;
    temp.write_all(contents)?;
    temp.as_file().sync_all()?;

    #[cfg(unix)]
    {
        if let Some(mode) = mode {
            use std::os::unix::fs::PermissionsExt;
            temp.as_file()
                .set_permissions(std::fs::Permissions::from_mode(mode))?;
        }
    }
    #[cfg(not(unix))]
    let _ = mode;

    temp.persist(path).map_err(|e| Error::Io(e.error))?;
    Ok(())
}

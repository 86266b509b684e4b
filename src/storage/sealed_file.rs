//! Sealed message files.
//!
//! The file holds `nonce || tag || ciphertext` exactly as produced by
//! [`AesGcmSystem`](crate::symmetric::AesGcmSystem), with no extra framing.
//!
//! 中文: 文件内容就是 `nonce || tag || ciphertext`，不额外加头。

use crate::common::errors::Error;
use crate::storage::atomic_write;
use crate::symmetric::systems::aes_gcm::SealedMessage;
use std::fs;
use std::path::Path;

/// Writes a sealed message to `path`.
/// 中文: 将加密结果写入文件。
pub fn write_sealed_message<P: AsRef<Path>>(path: P, message: &SealedMessage) -> Result<(), Error> {
    let path = path.as_ref();
    atomic_write(path, message.as_ref(), None)?;
    tracing::info!(path = %path.display(), bytes = message.as_ref().len(), "wrote sealed message");
    Ok(())
}

/// Reads a sealed message from `path`, rejecting files too short to hold a nonce and tag.
/// 中文: 从文件读取加密结果，长度不足以容纳 nonce 与 tag 时报错。
pub fn read_sealed_message<P: AsRef<Path>>(path: P) -> Result<SealedMessage, Error> {
    let bytes = fs::read(path.as_ref())?;
    Ok(SealedMessage::from_bytes(&bytes)?)
}

use crate::symmetric::systems::aes_gcm::AesGcmSystemError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SymmetricError {
    #[error("AES-GCM System error: {0}")]
    AesGcm(#[from] AesGcmSystemError),
}

use crate::asymmetric::errors::AsymmetricError;
use crate::common::encoding::EncodingError;
use crate::signature::errors::SignatureError;
use crate::symmetric::errors::SymmetricError;
use thiserror::Error;

/// 本库所有操作可能遇到的错误类型
///
/// 各子系统保留自己的错误枚举，这里通过 `#[from]` 统一汇总，
/// 便于演示程序与调用方使用 `?` 一路向上传播。
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    #[error("Serialization error (JSON)")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Encoding error")]
    Encoding(#[from] EncodingError),

    #[error("Invalid data format: {0}")]
    Format(String),

    #[error("Asymmetric cryptographic error")]
    Asymmetric(#[from] AsymmetricError),

    #[error("Symmetric cryptographic error")]
    Symmetric(#[from] SymmetricError),

    #[error("Textbook signature error")]
    Signature(#[from] SignatureError),
}

// 手动实现一些无法使用 #[from] 的转换
impl From<std::string::FromUtf8Error> for Error {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Error::Format(format!("UTF-8 conversion error: {}", err))
    }
}

impl From<crate::asymmetric::systems::traditional::rsa::RsaSystemError> for Error {
    fn from(err: crate::asymmetric::systems::traditional::rsa::RsaSystemError) -> Self {
        Error::Asymmetric(AsymmetricError::from(err))
    }
}

impl From<crate::symmetric::systems::aes_gcm::AesGcmSystemError> for Error {
    fn from(err: crate::symmetric::systems::aes_gcm::AesGcmSystemError) -> Self {
        Error::Symmetric(SymmetricError::from(err))
    }
}

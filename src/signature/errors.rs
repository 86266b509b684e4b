use crate::asymmetric::systems::traditional::rsa::RsaSystemError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SignatureError {
    #[error("RSA modulus must be non-zero")]
    ZeroModulus,

    #[error("Invalid hexadecimal signature: {0:?}")]
    InvalidHex(String),

    #[error("RSA key error: {0}")]
    Rsa(#[from] RsaSystemError),

    #[error("Parallel execution setup failed: {0}")]
    ParallelSetup(String),

    #[error("Got {messages} messages but {signatures} signatures")]
    LengthMismatch { messages: usize, signatures: usize },
}

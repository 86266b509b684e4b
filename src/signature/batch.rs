//! 并行批量签名与验签。
//!
//! 教科书式签名是纯函数，不共享可变状态，可以直接在 rayon 线程池里并行映射。
//! 结果顺序与输入顺序一致。

use crate::common::config::CryptoConfig;
use crate::signature::errors::SignatureError;
use crate::signature::textbook::{
    TextbookPrivateKey, TextbookPublicKey, TextbookSignature, sign_with, verify_with,
};
use rayon::prelude::*;

fn build_pool(config: &CryptoConfig) -> Result<rayon::ThreadPool, SignatureError> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(config.parallelism)
        .build()
        .map_err(|e| SignatureError::ParallelSetup(e.to_string()))
}

/// 对每条消息签名，摘要算法取自 `config.signature_hash`
pub fn sign_batch<M>(
    messages: &[M],
    key: &TextbookPrivateKey,
    config: &CryptoConfig,
) -> Result<Vec<TextbookSignature>, SignatureError>
where
    M: AsRef<[u8]> + Sync,
{
    let pool = build_pool(config)?;
    let hash = config.signature_hash;
    tracing::debug!(count = messages.len(), threads = pool.current_num_threads(), "batch sign");

    Ok(pool.install(|| {
        messages
            .par_iter()
            .map(|message| sign_with(hash, message.as_ref(), key))
            .collect()
    }))
}

/// 逐条验签，返回与输入等长的布尔结果
pub fn verify_batch<M>(
    messages: &[M],
    signatures: &[TextbookSignature],
    key: &TextbookPublicKey,
    config: &CryptoConfig,
) -> Result<Vec<bool>, SignatureError>
where
    M: AsRef<[u8]> + Sync,
{
    if messages.len() != signatures.len() {
        return Err(SignatureError::LengthMismatch {
            messages: messages.len(),
            signatures: signatures.len(),
        });
    }

    let pool = build_pool(config)?;
    let hash = config.signature_hash;
    tracing::debug!(count = messages.len(), threads = pool.current_num_threads(), "batch verify");

    Ok(pool.install(|| {
        messages
            .par_iter()
            .zip(signatures.par_iter())
            .map(|(message, signature)| verify_with(hash, message.as_ref(), signature, key))
            .collect()
    }))
}

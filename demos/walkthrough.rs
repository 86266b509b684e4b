//! 按顺序演示每一步：AES 加解密、RSA-OAEP、SHA-2 摘要、教科书式 RSA 签名。
//!
//! 运行：`RUST_LOG=debug cargo run --example walkthrough`
use crypto_primer::common::encoding::{to_base64, to_hex};
use crypto_primer::hashing::{self, HashAlgorithm};
use crypto_primer::prelude::*;
use crypto_primer::signature::textbook::digest_exceeds_modulus;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ConfigFile::from_env()?;
    let work_dir = std::env::temp_dir().join(format!("crypto-primer-{}", std::process::id()));
    std::fs::create_dir_all(&work_dir)?;

    // 1. 对称加密：AES-256-GCM
    let aes_key = AesGcmSystem::generate_key(&config.crypto)?;
    println!("AES key (Base64): {}", AesGcmSystem::export_key(&aes_key)?);

    let sealed = AesGcmSystem::encrypt(&aes_key, b"Attack at dawn", None)?;
    let sealed_path = work_dir.join("encrypted.bin");
    write_sealed_message(&sealed_path, &sealed)?;
    println!("nonce = {}", to_hex(sealed.nonce()));
    println!("tag   = {}", to_hex(sealed.tag()));

    let from_disk = read_sealed_message(&sealed_path)?;
    let plaintext = AesGcmSystem::decrypt(&aes_key, from_disk.as_ref(), None)?;
    println!("AES decrypted: {}", String::from_utf8(plaintext)?);

    // 2. 非对称加密：RSA-OAEP
    let (public_key, private_key) = RsaCryptoSystem::generate_keypair(&config.crypto)?;
    let store = KeyStore::new(work_dir.join("keys"));
    let manifest = store.save(&public_key, &private_key)?;
    println!("Saved {} key pair {} to {}", manifest.algorithm, manifest.id, store.dir().display());

    let ciphertext = RsaCryptoSystem::encrypt(&public_key, b"A secret for RSA", None)?;
    println!("RSA ciphertext (Base64): {}", to_base64(&ciphertext));
    let (_, _, loaded_private) = store.load()?;
    let decrypted = RsaCryptoSystem::decrypt(&loaded_private, &ciphertext, None)?;
    println!("RSA decrypted: {}", String::from_utf8(decrypted)?);

    // 3. 哈希：SHA-256 / SHA-512
    let message = b"A message for signing";
    println!("SHA-256: {}", hashing::digest_hex(HashAlgorithm::Sha256, message));
    println!("SHA-512: {}", hashing::digest_hex(HashAlgorithm::Sha512, message));

    // 4. 教科书式 RSA 签名：用上面生成的密钥对
    let keys = TextbookKeyPair::from_rsa_private_key(&private_key)?;
    let hash = config.crypto.signature_hash;
    if digest_exceeds_modulus(hash, message, keys.public().modulus()) {
        println!("Warning: {} digest does not fit below the modulus", hash);
    }
    let signature = sign_with(hash, message, keys.private());
    println!("Signature (hex): {}", signature);
    println!(
        "Valid for original message: {}",
        verify_with(hash, message, &signature, keys.public())
    );
    println!(
        "Valid for a different message: {}",
        verify_with(hash, b"A different message", &signature, keys.public())
    );

    std::fs::remove_dir_all(&work_dir)?;
    Ok(())
}

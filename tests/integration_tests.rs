//!
//! 集成测试
//!
//! 按演示的顺序串起各模块：配置、对称加密与文件、RSA 密钥落盘、教科书式签名。
//!

mod common;

use common::{fast_config, setup_rsa_keys};
use crypto_primer::prelude::*;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_aes_file_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("encrypted.bin");
    let config = fast_config();

    let key = AesGcmSystem::generate_key(&config).unwrap();
    let exported = AesGcmSystem::export_key(&key).unwrap();

    let sealed = AesGcmSystem::encrypt(&key, b"Attack at dawn", Some(b"header")).unwrap();
    write_sealed_message(&path, &sealed).unwrap();

    // 重新导入密钥，模拟另一个进程读取文件
    let imported = AesGcmSystem::import_key(&exported).unwrap();
    let loaded = read_sealed_message(&path).unwrap();
    let plaintext = AesGcmSystem::decrypt(&imported, loaded.as_ref(), Some(b"header")).unwrap();
    assert_eq!(plaintext, b"Attack at dawn");

    // 篡改文件后认证失败
    let mut bytes = fs::read(&path).unwrap();
    let last = bytes.len() - 1;
    bytes[last] ^= 0x80;
    fs::write(&path, &bytes).unwrap();
    let tampered = read_sealed_message(&path).unwrap();
    assert!(AesGcmSystem::decrypt(&imported, tampered.as_ref(), Some(b"header")).is_err());
}

#[test]
fn test_rsa_wraps_aes_key() {
    let (public_key, private_key) = setup_rsa_keys();
    let aes_key = AesGcmSystem::generate_key(&fast_config()).unwrap();

    let wrapped = RsaCryptoSystem::encrypt(&public_key, aes_key.as_bytes(), None).unwrap();
    let unwrapped = RsaCryptoSystem::decrypt(&private_key, &wrapped, None).unwrap();
    let recovered = AesGcmKey::from_bytes(&unwrapped).unwrap();

    let sealed = AesGcmSystem::encrypt(&aes_key, b"hybrid", None).unwrap();
    assert_eq!(AesGcmSystem::decrypt(&recovered, sealed.as_ref(), None).unwrap(), b"hybrid");
}

#[test]
fn test_key_store_then_textbook_signature() {
    let dir = tempdir().unwrap();
    let store = KeyStore::new(dir.path().join("keys"));
    let (public_key, private_key) = setup_rsa_keys();
    store.save(&public_key, &private_key).unwrap();

    let (manifest, loaded_public, loaded_private) = store.load().unwrap();
    assert_eq!(manifest.key_bits, 1024);

    let keys = TextbookKeyPair::from_rsa_private_key(&loaded_private).unwrap();
    let signature = sign(b"A message for signing", keys.private());
    assert!(verify(b"A message for signing", &signature, keys.public()));

    // 公钥文件与签名公钥的模数一致
    let rsa_public = loaded_public.to_rsa_key().unwrap();
    use rsa::traits::PublicKeyParts;
    assert_eq!(rsa_public.n(), keys.public().modulus());
}

#[test]
fn test_config_file_drives_key_generation() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.json");
    fs::write(
        &path,
        format!(
            r#"{{
                "crypto": {{ "rsa_key_bits": 1024, "signature_hash": "sha256" }},
                "storage": {{ "key_storage_dir": "{}" }}
            }}"#,
            dir.path().join("keys").display()
        ),
    )
    .unwrap();

    let config = ConfigFile::from_file(&path).unwrap();
    assert_eq!(config.crypto.signature_hash, HashAlgorithm::Sha256);

    let (public_key, private_key) = RsaCryptoSystem::generate_keypair(&config.crypto).unwrap();
    assert_eq!(public_key.modulus_bits().unwrap(), 1024);

    let store = KeyStore::from_config(&config.storage);
    store.save(&public_key, &private_key).unwrap();
    assert!(store.exists());

    let keys = TextbookKeyPair::from_rsa_private_key(&private_key).unwrap();
    let hash = config.crypto.signature_hash;
    let signature = sign_with(hash, b"configured", keys.private());
    assert!(verify_with(hash, b"configured", &signature, keys.public()));
}

#[test]
fn test_errors_propagate_to_crate_error() {
    fn load_missing(dir: &std::path::Path) -> Result<(), Error> {
        KeyStore::new(dir).load()?;
        Ok(())
    }
    fn bad_import() -> Result<(), Error> {
        RsaCryptoSystem::import_public_key("garbage")?;
        Ok(())
    }

    let dir = tempdir().unwrap();
    assert!(matches!(load_missing(dir.path()), Err(Error::Io(_))));
    assert!(matches!(bad_import(), Err(Error::Asymmetric(_))));
}

#[cfg(feature = "parallel")]
#[test]
fn test_batch_signing_with_generated_keys() {
    use crypto_primer::signature::batch::{sign_batch, verify_batch};

    let config = CryptoConfig {
        parallelism: 2,
        ..fast_config()
    };
    let keys = TextbookKeyPair::generate(&config).unwrap();
    let messages: Vec<String> = (0..10).map(|i| format!("entry {}", i)).collect();

    let signatures = sign_batch(&messages, keys.private(), &config).unwrap();
    let results = verify_batch(&messages, &signatures, keys.public(), &config).unwrap();
    assert_eq!(results, vec![true; 10]);
}

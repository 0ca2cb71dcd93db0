//! Secret sealing for values stored in configuration files.
//!
//! Sealed values are AES-256-GCM ciphertexts, Base64 encoded and tagged with
//! an `enc:` prefix so hand-written plain values in the file still load.

use crate::error::{Error, Result};
use aes_gcm::{
    Aes256Gcm,
    aead::{Aead, AeadCore, KeyInit, Nonce, OsRng},
};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// Marker prefix of sealed values
pub const SEALED_PREFIX: &str = "enc:";

/// Nonce length of AES-GCM (96 bits)
const NONCE_LEN: usize = 12;

/// Key for at-rest obfuscation of the stored API key.
///
/// WARNING: compiled into the binary; this keeps keys out of plain sight in
/// the config file, it does not protect them from someone holding the binary.
const SEAL_KEY: &[u8; 32] = b"AdminDashBackendKeySeal-v1-2026!";

/// Whether `value` carries the sealed marker
pub fn is_sealed(value: &str) -> bool {
    value.starts_with(SEALED_PREFIX)
}

/// Seal a plaintext value: `enc:` + Base64(`[nonce][ciphertext]`)
pub fn seal(plain_text: &str) -> Result<String> {
    let cipher = Aes256Gcm::new(SEAL_KEY.into());
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plain_text.as_bytes())
        .map_err(|e| Error::Invalid {
            message: format!("Encryption failed: {e}"),
        })?;

    let mut combined = nonce.to_vec();
    combined.extend_from_slice(&ciphertext);

    Ok(format!("{SEALED_PREFIX}{}", BASE64.encode(combined)))
}

/// Open a value produced by [`seal`]; unsealed values are returned as-is
pub fn open(value: &str) -> Result<String> {
    let Some(encoded) = value.strip_prefix(SEALED_PREFIX) else {
        return Ok(value.to_string());
    };

    let data = BASE64.decode(encoded).map_err(|e| Error::Invalid {
        message: format!("Base64 decode failed: {e}"),
    })?;

    if data.len() < NONCE_LEN {
        return Err(Error::Invalid {
            message: "Ciphertext too short".to_string(),
        });
    }

    let cipher = Aes256Gcm::new(SEAL_KEY.into());
    let (nonce_bytes, ciphertext) = data.split_at(NONCE_LEN);
    let nonce = Nonce::<Aes256Gcm>::from_slice(nonce_bytes);

    let plaintext_bytes = cipher.decrypt(nonce, ciphertext).map_err(|e| Error::Invalid {
        message: format!("Decryption failed: {e}"),
    })?;

    String::from_utf8(plaintext_bytes).map_err(|e| Error::Invalid {
        message: format!("UTF-8 decode failed: {e}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seal_then_open() {
        let sealed = seal("anon-key-123").expect("seal");
        assert!(is_sealed(&sealed));
        assert_eq!(open(&sealed).expect("open"), "anon-key-123");
    }

    #[test]
    fn seal_uses_fresh_nonce() {
        let a = seal("same").expect("seal");
        let b = seal("same").expect("seal");
        assert_ne!(a, b);
    }

    #[test]
    fn plain_values_pass_through() {
        assert_eq!(open("plain-key").expect("open"), "plain-key");
    }

    #[test]
    fn broken_sealed_values_fail() {
        assert!(open("enc:not_valid_base64!!!").is_err());
        assert!(open("enc:AQIDBA==").is_err());
    }
}

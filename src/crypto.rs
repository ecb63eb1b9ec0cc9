//! Low-level cryptographic operations.
//!
//! This module is one of exactly two places in the crate that import `ring`
//! directly (the other is `verify`). All other modules perform encryption and
//! decryption exclusively through the functions exposed here.
//!
//! Primitive choices:
//! - **Cipher**: AES-256-GCM (authenticated encryption)
//! - **Nonce**: 96-bit (12 bytes), generated fresh per operation via `SystemRandom`
//! - **Key size**: 256 bits (32 bytes)

use ring::aead::{self, Aad, LessSafeKey, Nonce, UnboundKey, AES_256_GCM};
use ring::rand::{SecureRandom, SystemRandom};

use crate::error::VaultError;

/// The AEAD algorithm used throughout passvault.
const ALGORITHM: &aead::Algorithm = &AES_256_GCM;

/// Size of the nonce in bytes (96 bits).
pub const NONCE_LEN: usize = 12;

/// Size of the vault key in bytes (256 bits).
pub const KEY_LEN: usize = 32;

/// Generate a fresh random nonce for a single encryption operation.
///
/// Uses `ring::rand::SystemRandom` — the only source of randomness in the
/// crate. There is no nonce caching or counter-based generation.
fn generate_nonce() -> Result<[u8; NONCE_LEN], VaultError> {
    let rng = SystemRandom::new();
    let mut buf = [0u8; NONCE_LEN];
    rng.fill(&mut buf).map_err(|_| VaultError::RandomnessFailure)?;
    Ok(buf)
}

/// Encrypt a plaintext payload using AES-256-GCM.
///
/// Returns the nonce prepended to the ciphertext. The caller does not need to
/// manage the nonce separately — it is bundled with the output and extracted
/// automatically during decryption.
///
/// # Layout of returned bytes
/// ```text
/// [ nonce (12 bytes) ][ ciphertext + GCM tag ]
/// ```
pub fn encrypt(key_bytes: &[u8; KEY_LEN], plaintext: &[u8]) -> Result<Vec<u8>, VaultError> {
    let unbound = UnboundKey::new(ALGORITHM, key_bytes).map_err(|_| VaultError::InvalidKey)?;
    let key = LessSafeKey::new(unbound);

    let nonce_bytes = generate_nonce()?;
    let nonce = Nonce::assume_unique_for_key(nonce_bytes);

    // `seal_in_place_append_tag` encrypts the buffer in place and appends
    // the GCM authentication tag.
    let mut sealed = plaintext.to_vec();
    key.seal_in_place_append_tag(nonce, Aad::empty(), &mut sealed)
        .map_err(|_| VaultError::EncryptionFailure)?;

    let mut output = Vec::with_capacity(NONCE_LEN + sealed.len());
    output.extend_from_slice(&nonce_bytes);
    output.extend_from_slice(&sealed);
    Ok(output)
}

/// Decrypt a ciphertext payload using AES-256-GCM.
///
/// Expects the input to be in the layout produced by `encrypt`:
/// nonce (12 bytes) followed by ciphertext and GCM tag.
///
/// If the key is wrong or the ciphertext has been tampered with, the GCM
/// authentication check fails and this function returns an error. The caller
/// receives no partial plaintext.
pub fn decrypt(key_bytes: &[u8; KEY_LEN], ciphertext: &[u8]) -> Result<Vec<u8>, VaultError> {
    if ciphertext.len() < NONCE_LEN {
        return Err(VaultError::DecryptionFailure);
    }

    let nonce_bytes: [u8; NONCE_LEN] = ciphertext[..NONCE_LEN]
        .try_into()
        .map_err(|_| VaultError::DecryptionFailure)?;
    let nonce = Nonce::assume_unique_for_key(nonce_bytes);

    let unbound = UnboundKey::new(ALGORITHM, key_bytes).map_err(|_| VaultError::InvalidKey)?;
    let key = LessSafeKey::new(unbound);

    let mut payload = ciphertext[NONCE_LEN..].to_vec();
    let plaintext = key
        .open_in_place(nonce, Aad::empty(), &mut payload)
        .map_err(|_| VaultError::DecryptionFailure)?;

    Ok(plaintext.to_vec())
}

/// Generate a cryptographically secure random key.
///
/// This is the only function in the crate that produces raw key material from
/// scratch. It is used by `generate_vault_key()` in the public API.
pub fn generate_random_key() -> Result<[u8; KEY_LEN], VaultError> {
    let rng = SystemRandom::new();
    let mut key = [0u8; KEY_LEN];
    rng.fill(&mut key).map_err(|_| VaultError::RandomnessFailure)?;
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let key = [7u8; KEY_LEN];
        let sealed = encrypt(&key, b"vault payload").unwrap();
        assert_eq!(decrypt(&key, &sealed).unwrap(), b"vault payload");
    }

    #[test]
    fn test_tampered_byte_rejected() {
        let key = [7u8; KEY_LEN];
        let mut sealed = encrypt(&key, b"vault payload").unwrap();

        // Flip one bit anywhere in the output; the GCM tag must catch it.
        let mid = sealed.len() / 2;
        sealed[mid] ^= 0x01;
        assert_eq!(decrypt(&key, &sealed), Err(VaultError::DecryptionFailure));
    }

    #[test]
    fn test_wrong_key_rejected() {
        let sealed = encrypt(&[1u8; KEY_LEN], b"vault payload").unwrap();
        assert_eq!(
            decrypt(&[2u8; KEY_LEN], &sealed),
            Err(VaultError::DecryptionFailure)
        );
    }

    #[test]
    fn test_truncated_input_rejected() {
        let key = [7u8; KEY_LEN];
        assert_eq!(decrypt(&key, &[0u8; 4]), Err(VaultError::DecryptionFailure));
    }
}

//! Vault key ownership.
//!
//! The vault key is the single symmetric secret protecting every entry. This
//! module holds it in a type that is opaque, non-cloneable, and zeroised on
//! drop. Raw bytes never leave the crate: `as_bytes()` is `pub(crate)`.
//!
//! The key is process-lifetime by default — `crate::generate_vault_key()`
//! mints a fresh one and nothing in this core persists it, so entries from a
//! previous process are unrecoverable unless the host injected the same key
//! bytes via `VaultKey::from_bytes`. Key persistence, if a deployment wants
//! it, is the host's collaborator, never this crate's.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::crypto::KEY_LEN;

/// The process-lifetime symmetric key.
///
/// - Not `Clone`. Cannot be duplicated without explicit conversion.
/// - Zeroised on drop. Memory is overwritten before deallocation.
/// - Immutable after construction, so concurrent reads need no lock.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct VaultKey {
    bytes: [u8; KEY_LEN],
}

impl VaultKey {
    /// Construct a `VaultKey` from raw bytes.
    ///
    /// This is the injection point for a durable deployment that loads key
    /// material from its own key store. For an ephemeral vault, use
    /// `crate::generate_vault_key()` which calls
    /// `crypto::generate_random_key()` internally.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Borrow the raw key bytes for use in encrypt/decrypt operations.
    ///
    /// This method is `pub(crate)` — raw bytes never leave the crate.
    pub(crate) fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

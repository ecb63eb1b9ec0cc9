//! # passvault
//!
//! Passkey-gated authenticated-encryption vault with session lockout.
//!
//! Plaintext is sealed with a process-lifetime symmetric key and recorded
//! under the one-way digest of a caller-chosen passkey. Retrieval presents
//! the ciphertext together with the passkey; three consecutive mismatches
//! lock the session until it is reauthorized with an injected master
//! credential. Presentation code (forms, CLI, menus) lives outside this
//! crate and only calls the operations exposed here.
//!
//! ## Public API
//!
//! The public surface of this crate is intentionally narrow. Only the types
//! and functions listed here are intended for use by callers. Everything else
//! is `pub(crate)` at most.

// Module declarations.
pub(crate) mod crypto;
pub mod error;
pub mod keys;
pub mod lockout;
pub mod store;
pub(crate) mod verify;

pub use error::VaultError;
pub use keys::VaultKey;
pub use lockout::{LockoutPhase, SessionLockout, LOCKOUT_THRESHOLD};
pub use store::{EntryStore, MemoryStore, Vault, VaultEntry};
pub use verify::MasterCredential;

/// Generate a cryptographically secure vault key.
///
/// This is the only entry point for producing key material. The returned
/// `VaultKey` lives for the process and is never persisted by this core; a
/// durable deployment should instead load its own key bytes and use
/// `VaultKey::from_bytes`.
pub fn generate_vault_key() -> Result<VaultKey, VaultError> {
    let bytes = crypto::generate_random_key()?;
    Ok(VaultKey::from_bytes(bytes))
}

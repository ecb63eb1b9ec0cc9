//! Entry storage and the vault itself.
//!
//! A `Vault` ties the pieces together: it encrypts plaintext with the vault
//! key, digests the protecting passkey, and records the pair as a
//! `VaultEntry` in an `EntryStore` backend. It is the single source of truth
//! for "does this ciphertext exist and what protects it".
//!
//! The backend is an injected capability. `MemoryStore` is the default
//! in-process map; a host serving concurrent sessions can inject a
//! lock-protected backend instead (or serialize access to the vault itself)
//! without changing the vault's contract.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::error;

use crate::crypto;
use crate::error::VaultError;
use crate::keys::VaultKey;
use crate::lockout::SessionLockout;
use crate::verify::{self, MasterCredential};

/// One protected record: a ciphertext and the digest of the passkey that
/// guards it.
///
/// Created by `Vault::store`, never mutated afterwards, and removed only by
/// backend teardown — this core exposes no delete operation. The struct is
/// the exact shape a host may persist externally; it carries no key material
/// by construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultEntry {
    /// Hex-encoded AEAD output. Doubles as the entry's lookup key and the
    /// caller's sole retrieval token.
    pub ciphertext: String,
    /// Hex SHA-256 of the protecting passkey.
    pub passkey_digest: String,
}

/// A backend that holds vault entries. Implement this to swap the default
/// in-process map for a lock-protected or persistent store.
pub trait EntryStore {
    /// Insert an entry, keyed by its ciphertext. An existing entry under the
    /// same ciphertext is overwritten.
    fn insert(&mut self, entry: VaultEntry);

    /// Look up an entry by exact ciphertext match.
    ///
    /// Returns an owned copy so that lock-protected backends can release
    /// their guard before handing the entry back.
    fn lookup(&self, ciphertext: &str) -> Option<VaultEntry>;
}

/// The default backend: a plain in-process map.
///
/// Entries live until the process exits. Callers sharing one `MemoryStore`
/// across threads must serialize access around the owning `Vault`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, VaultEntry>,
}

impl MemoryStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently held.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are held.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl EntryStore for MemoryStore {
    fn insert(&mut self, entry: VaultEntry) {
        self.entries.insert(entry.ciphertext.clone(), entry);
    }

    fn lookup(&self, ciphertext: &str) -> Option<VaultEntry> {
        self.entries.get(ciphertext).cloned()
    }
}

/// The passkey-gated vault.
///
/// Owns the symmetric key and the entry backend. Lockout state is *not*
/// owned here — each session passes its own `SessionLockout` into every
/// retrieval and reauthorization call.
pub struct Vault<S: EntryStore = MemoryStore> {
    key: VaultKey,
    master: MasterCredential,
    entries: S,
}

impl Vault<MemoryStore> {
    /// A vault with a freshly generated process-lifetime key and an empty
    /// in-process backend.
    pub fn new(master: MasterCredential) -> Result<Self, VaultError> {
        Ok(Self::with_key(crate::generate_vault_key()?, master))
    }

    /// A vault over an injected key and an empty in-process backend.
    ///
    /// This is the constructor for hosts that load key material from their
    /// own key store instead of regenerating per run.
    pub fn with_key(key: VaultKey, master: MasterCredential) -> Self {
        Self::with_store(key, master, MemoryStore::new())
    }
}

impl<S: EntryStore> Vault<S> {
    /// A vault over an injected key and an injected entry backend.
    pub fn with_store(key: VaultKey, master: MasterCredential, entries: S) -> Self {
        Self {
            key,
            master,
            entries,
        }
    }

    /// Release the entry backend, consuming the vault. The key is dropped
    /// (and zeroised) here; a host persisting entries must re-wrap them with
    /// the same key bytes to read them again.
    pub fn into_store(self) -> S {
        self.entries
    }

    /// Encrypt `plaintext`, record it under the digest of `passkey`, and
    /// return the ciphertext — the caller's only retrieval token.
    ///
    /// Both arguments must be non-empty. The ciphertext embeds a fresh
    /// random nonce, so storing the same plaintext twice yields two distinct
    /// entries.
    pub fn store(&mut self, plaintext: &str, passkey: &str) -> Result<String, VaultError> {
        if plaintext.is_empty() {
            return Err(VaultError::EmptyInput("plaintext"));
        }
        if passkey.is_empty() {
            return Err(VaultError::EmptyInput("passkey"));
        }

        let sealed = crypto::encrypt(self.key.as_bytes(), plaintext.as_bytes())?;
        let ciphertext = hex::encode(sealed);

        self.entries.insert(VaultEntry {
            ciphertext: ciphertext.clone(),
            passkey_digest: verify::digest_passkey(passkey),
        });

        Ok(ciphertext)
    }

    /// Retrieve the plaintext behind `ciphertext` by presenting its passkey.
    ///
    /// The session's lockout state gates the call: a locked session is
    /// rejected (`LockedOut`) before the passkey is examined and without
    /// consuming an attempt. An unknown ciphertext is `NotFound` and leaves
    /// the counter untouched — no credential was tested. A digest mismatch
    /// on a known entry increments the counter and reports the attempts
    /// remaining; a match resets the counter and decrypts.
    ///
    /// A decryption failure on a *matched* entry means the backend holds a
    /// ciphertext this key never produced — corrupted storage or a key
    /// mismatch bug. That is surfaced as `IntegrityFailure` and logged; it
    /// is never conflated with a wrong passkey.
    pub fn retrieve(
        &self,
        ciphertext: &str,
        passkey: &str,
        session: &mut SessionLockout,
    ) -> Result<String, VaultError> {
        if session.is_locked() {
            return Err(VaultError::LockedOut);
        }

        let entry = self.entries.lookup(ciphertext).ok_or(VaultError::NotFound)?;

        let candidate = verify::digest_passkey(passkey);
        if !verify::digests_match(&candidate, &entry.passkey_digest) {
            let attempts_remaining = session.record_failure();
            return Err(VaultError::PasskeyMismatch { attempts_remaining });
        }

        session.reset();

        let sealed = hex::decode(ciphertext).map_err(|_| {
            error!(target: "passvault", "stored ciphertext is not valid hex");
            VaultError::IntegrityFailure
        })?;
        let plaintext = crypto::decrypt(self.key.as_bytes(), &sealed).map_err(|_| {
            error!(target: "passvault", "decryption failed on a passkey-matched entry");
            VaultError::IntegrityFailure
        })?;

        String::from_utf8(plaintext).map_err(|_| {
            error!(target: "passvault", "decrypted payload is not valid UTF-8");
            VaultError::IntegrityFailure
        })
    }

    /// Clear a session's lockout by presenting the master credential.
    ///
    /// The comparison is constant-time. Success resets the failure counter
    /// from any phase; failure leaves the session exactly as it was — the
    /// retrieval counter is its own path and reauthorization never touches
    /// it.
    pub fn reauthorize(
        &self,
        session: &mut SessionLockout,
        credential: &str,
    ) -> Result<(), VaultError> {
        if !self.master.verify(credential) {
            return Err(VaultError::CredentialRejected);
        }
        session.reset();
        Ok(())
    }
}

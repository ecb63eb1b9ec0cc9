//! One-way passkey verification.
//!
//! This module is one of exactly two places in the crate that import `ring`
//! directly (the other is `crypto`). It owns two responsibilities:
//! 1. Digesting passkeys with SHA-256 so a secret is never stored in
//!    recoverable form.
//! 2. Comparing digests in constant time, so a digest match never leaks
//!    through a timing side channel. Every comparison in the crate goes
//!    through `digests_match` — there is no `==` on secret-derived strings.

use ring::constant_time;
use ring::digest::{digest, SHA256};

/// Compute the one-way digest of a passkey.
///
/// Deterministic: the same passkey always produces the same digest, which is
/// what lets `VaultEntry` store the digest instead of the secret. Output is
/// lowercase hex of the SHA-256 of the UTF-8 passkey bytes.
pub(crate) fn digest_passkey(passkey: &str) -> String {
    hex::encode(digest(&SHA256, passkey.as_bytes()))
}

/// Compare two digests in constant time.
///
/// Both inputs are hex strings of equal length for any digest produced by
/// `digest_passkey`; a length mismatch fails without examining content.
pub(crate) fn digests_match(a: &str, b: &str) -> bool {
    constant_time::verify_slices_are_equal(a.as_bytes(), b.as_bytes()).is_ok()
}

/// The injected reauthorization secret.
///
/// Constructed once by the host at vault initialization and consulted only by
/// `Vault::reauthorize`. Holds the digest of the secret, never the secret
/// itself, and is not tied to any vault entry.
pub struct MasterCredential {
    digest: String,
}

impl MasterCredential {
    /// Digest and hold a master secret supplied by the host.
    pub fn new(secret: &str) -> Self {
        Self {
            digest: digest_passkey(secret),
        }
    }

    /// Check a candidate secret against the held digest, in constant time.
    pub(crate) fn verify(&self, candidate: &str) -> bool {
        digests_match(&digest_passkey(candidate), &self.digest)
    }
}

//! Error types for passvault.
//!
//! Every error variant is a distinct failure mode of the vault core. Error
//! messages are intentionally minimal — they signal *what* failed without
//! revealing *why* in ways that could leak cryptographic state.

use std::fmt;

/// The single error type for all passvault operations.
#[derive(Debug, PartialEq, Eq)]
pub enum VaultError {
    /// A required input was empty. Carries the name of the offending
    /// argument. Recovered locally by re-prompting the caller; never a
    /// security event.
    EmptyInput(&'static str),

    /// No entry exists for the presented ciphertext. Does not consume a
    /// lockout attempt — no credential was tested.
    NotFound,

    /// The supplied passkey does not protect the presented ciphertext.
    /// Carries the number of attempts left before the session locks.
    PasskeyMismatch {
        /// `LOCKOUT_THRESHOLD` minus the session's failure count, floor 0.
        attempts_remaining: u32,
    },

    /// The master credential presented during reauthorization was wrong.
    /// The session stays locked; the retrieval counter is untouched.
    CredentialRejected,

    /// Retrieval was attempted while the session is locked. No attempt is
    /// consumed; the passkey is never examined.
    LockedOut,

    /// Decryption of a passkey-matched entry failed its integrity check.
    /// Indicates corrupted storage or a key mismatch bug — fatal, never a
    /// user-correctable condition.
    IntegrityFailure,

    /// Decryption failed: malformed ciphertext, wrong key, or corrupted
    /// GCM authentication tag.
    DecryptionFailure,

    /// Encryption failed. The underlying `ring` operation returned an error.
    EncryptionFailure,

    /// A cryptographic key was invalid (wrong length, malformed, etc.).
    InvalidKey,

    /// The system's random number generator failed to produce bytes.
    RandomnessFailure,
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput(field) => write!(f, "required input is empty: {}", field),
            Self::NotFound => write!(f, "no entry for the presented ciphertext"),
            Self::PasskeyMismatch { attempts_remaining } => {
                write!(f, "passkey rejected ({} attempts remaining)", attempts_remaining)
            }
            Self::CredentialRejected => write!(f, "master credential rejected"),
            Self::LockedOut => write!(f, "session is locked; reauthorization required"),
            Self::IntegrityFailure => write!(f, "internal integrity failure"),
            Self::DecryptionFailure => write!(f, "decryption failed"),
            Self::EncryptionFailure => write!(f, "encryption failed"),
            Self::InvalidKey => write!(f, "invalid key"),
            Self::RandomnessFailure => write!(f, "randomness source failed"),
        }
    }
}

impl std::error::Error for VaultError {}

//! Per-session lockout state machine.
//!
//! A session cycles between two phases derived from one counter:
//!
//! ```text
//! Active (failed < 3) --failed retrieval x3--> Locked (failed >= 3)
//! Active <--successful retrieval / reauthorization-- Locked
//! ```
//!
//! There is no terminal phase; the machine lives as long as the session and
//! can lock and unlock indefinitely. Enforcement happens inside the vault on
//! every retrieval call — a locked session is rejected before its passkey is
//! ever examined, so no surrounding navigation or UI flow can bypass it.
//!
//! Each `SessionLockout` belongs to exactly one session. The caller owns it,
//! passes it into every retrieval and reauthorization call, and must never
//! share one value across concurrent sessions.

/// Consecutive failed retrievals before a session locks.
pub const LOCKOUT_THRESHOLD: u32 = 3;

/// The two phases of a session, derived from its failure counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockoutPhase {
    /// Retrieval attempts are evaluated normally.
    Active,
    /// Retrieval is rejected until reauthorization succeeds.
    Locked,
}

/// Failed-attempt tracking for a single session.
///
/// Starts `Active` with a zero counter. Mutated only through the vault:
/// failed retrievals increment, successful retrievals and successful
/// reauthorization reset.
#[derive(Debug, Default)]
pub struct SessionLockout {
    failed_attempts: u32,
}

impl SessionLockout {
    /// A fresh session: `Active`, no failures.
    pub fn new() -> Self {
        Self::default()
    }

    /// The session's current phase.
    pub fn phase(&self) -> LockoutPhase {
        if self.failed_attempts >= LOCKOUT_THRESHOLD {
            LockoutPhase::Locked
        } else {
            LockoutPhase::Active
        }
    }

    /// True once the failure counter has reached the threshold.
    pub fn is_locked(&self) -> bool {
        self.phase() == LockoutPhase::Locked
    }

    /// Consecutive failed retrievals since the last reset.
    pub fn failed_attempts(&self) -> u32 {
        self.failed_attempts
    }

    /// Attempts left before the session locks (floor 0).
    pub fn attempts_remaining(&self) -> u32 {
        LOCKOUT_THRESHOLD.saturating_sub(self.failed_attempts)
    }

    /// Record one failed retrieval and return the attempts now remaining.
    pub(crate) fn record_failure(&mut self) -> u32 {
        self.failed_attempts += 1;
        self.attempts_remaining()
    }

    /// Clear the counter: the session returns to `Active`.
    pub(crate) fn reset(&mut self) {
        self.failed_attempts = 0;
    }
}

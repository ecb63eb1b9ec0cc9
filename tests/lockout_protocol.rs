use passvault::{
    LockoutPhase, MasterCredential, SessionLockout, Vault, VaultError, LOCKOUT_THRESHOLD,
};

fn vault_with_entry() -> (Vault, String) {
    let mut vault = Vault::new(MasterCredential::new("admin123")).unwrap();
    let ciphertext = vault.store("hello world", "secret").unwrap();
    (vault, ciphertext)
}

#[test]
fn test_three_failures_lock_the_session() {
    // Scenario: three consecutive wrong passkeys, attempts counting down
    // 2 -> 1 -> 0, then the session is Locked.

    let (vault, ciphertext) = vault_with_entry();
    let mut session = SessionLockout::new();

    for expected_remaining in (0..LOCKOUT_THRESHOLD).rev() {
        let result = vault.retrieve(&ciphertext, "wrong", &mut session);
        assert_eq!(
            result,
            Err(VaultError::PasskeyMismatch {
                attempts_remaining: expected_remaining
            })
        );
    }

    assert_eq!(session.phase(), LockoutPhase::Locked);
}

#[test]
fn test_locked_session_rejects_correct_passkey() {
    // Goal: lockout is enforced on every call, before the credential check.
    // Even the correct passkey must not get through.

    let (vault, ciphertext) = vault_with_entry();
    let mut session = SessionLockout::new();

    for _ in 0..LOCKOUT_THRESHOLD {
        let _ = vault.retrieve(&ciphertext, "wrong", &mut session);
    }

    assert_eq!(
        vault.retrieve(&ciphertext, "secret", &mut session),
        Err(VaultError::LockedOut)
    );
    // A rejected call while locked consumes nothing.
    assert_eq!(session.failed_attempts(), LOCKOUT_THRESHOLD);
}

#[test]
fn test_success_resets_counter() {
    // Two failures, then a success: the counter must return to zero and the
    // session must survive two more failures without locking.

    let (vault, ciphertext) = vault_with_entry();
    let mut session = SessionLockout::new();

    let _ = vault.retrieve(&ciphertext, "wrong", &mut session);
    let _ = vault.retrieve(&ciphertext, "wrong", &mut session);
    assert_eq!(session.failed_attempts(), 2);

    assert_eq!(
        vault.retrieve(&ciphertext, "secret", &mut session).unwrap(),
        "hello world"
    );
    assert_eq!(session.failed_attempts(), 0);

    let _ = vault.retrieve(&ciphertext, "wrong", &mut session);
    let _ = vault.retrieve(&ciphertext, "wrong", &mut session);
    assert_eq!(session.phase(), LockoutPhase::Active);
}

#[test]
fn test_reauthorization_unlocks() {
    // Scenario: locked session, wrong master credential keeps it locked,
    // correct credential clears it and retrieval works again.

    let (vault, ciphertext) = vault_with_entry();
    let mut session = SessionLockout::new();

    for _ in 0..LOCKOUT_THRESHOLD {
        let _ = vault.retrieve(&ciphertext, "wrong", &mut session);
    }
    assert!(session.is_locked());

    assert_eq!(
        vault.reauthorize(&mut session, "not-the-master"),
        Err(VaultError::CredentialRejected)
    );
    assert!(session.is_locked());
    assert_eq!(session.failed_attempts(), LOCKOUT_THRESHOLD);

    vault.reauthorize(&mut session, "admin123").unwrap();
    assert_eq!(session.phase(), LockoutPhase::Active);
    assert_eq!(session.failed_attempts(), 0);

    assert_eq!(
        vault.retrieve(&ciphertext, "secret", &mut session).unwrap(),
        "hello world"
    );
}

#[test]
fn test_reauthorization_on_active_session_is_harmless() {
    let (vault, _) = vault_with_entry();
    let mut session = SessionLockout::new();

    vault.reauthorize(&mut session, "admin123").unwrap();
    assert_eq!(session.failed_attempts(), 0);

    // A failed reauthorization never touches the retrieval counter.
    let _ = vault.reauthorize(&mut session, "wrong");
    assert_eq!(session.failed_attempts(), 0);
}

#[test]
fn test_sessions_are_isolated() {
    // Goal: one session locking itself out must not affect another session
    // talking to the same vault.

    let (vault, ciphertext) = vault_with_entry();
    let mut session_a = SessionLockout::new();
    let mut session_b = SessionLockout::new();

    for _ in 0..LOCKOUT_THRESHOLD {
        let _ = vault.retrieve(&ciphertext, "wrong", &mut session_a);
    }
    assert!(session_a.is_locked());

    assert_eq!(
        vault.retrieve(&ciphertext, "secret", &mut session_b).unwrap(),
        "hello world"
    );
    assert_eq!(session_b.failed_attempts(), 0);
}

#[test]
fn test_lock_unlock_cycles_indefinitely() {
    // There is no terminal state: the machine can lock and be reauthorized
    // any number of times.

    let (vault, ciphertext) = vault_with_entry();
    let mut session = SessionLockout::new();

    for _ in 0..3 {
        for _ in 0..LOCKOUT_THRESHOLD {
            let _ = vault.retrieve(&ciphertext, "wrong", &mut session);
        }
        assert!(session.is_locked());
        vault.reauthorize(&mut session, "admin123").unwrap();
        assert!(!session.is_locked());
    }

    assert_eq!(
        vault.retrieve(&ciphertext, "secret", &mut session).unwrap(),
        "hello world"
    );
}

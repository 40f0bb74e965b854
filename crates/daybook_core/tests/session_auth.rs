use daybook_core::{
    CredentialVerifier, FixedCredentials, SessionStore, DEFAULT_PASSWORD, DEFAULT_USERNAME,
};

#[test]
fn default_pair_logs_in() {
    let mut store = SessionStore::new();
    assert!(!store.is_authenticated());
    assert!(store.login(DEFAULT_USERNAME, DEFAULT_PASSWORD));
    assert!(store.is_authenticated());
}

#[test]
fn any_other_pair_is_rejected_without_state_change() {
    let mut store = SessionStore::new();

    for (username, password) in [
        ("user", "wrong"),
        ("wrong", "pass"),
        ("", ""),
        ("USER", "PASS"),
        ("user ", "pass"),
        ("пользователь", "пароль"),
    ] {
        assert!(!store.login(username, password), "{username:?}/{password:?}");
        assert!(!store.is_authenticated());
    }
}

#[test]
fn login_is_total_over_arbitrary_strings() {
    let mut store = SessionStore::new();
    assert!(!store.login("user\0pass", ""));
    assert!(!store.login(&"x".repeat(10_000), "pass"));
    assert!(!store.is_authenticated());
}

#[test]
fn logout_always_clears_the_flag() {
    let mut store = SessionStore::new();

    // Idempotent while already logged out.
    store.logout();
    assert!(!store.is_authenticated());

    assert!(store.login("user", "pass"));
    store.logout();
    assert!(!store.is_authenticated());
    store.logout();
    assert!(!store.is_authenticated());
}

#[test]
fn relogin_after_logout_works() {
    let mut store = SessionStore::new();
    assert!(store.login("user", "pass"));
    store.logout();
    assert!(store.login("user", "pass"));
    assert!(store.is_authenticated());
}

#[test]
fn swapped_verifier_changes_the_accepted_pair_only() {
    let mut store = SessionStore::with_verifier(FixedCredentials::new("alice", "s3cret"));
    assert!(!store.login(DEFAULT_USERNAME, DEFAULT_PASSWORD));
    assert!(store.login("alice", "s3cret"));
    assert!(store.is_authenticated());
}

#[test]
fn verifier_trait_is_object_safe() {
    let verifier: Box<dyn CredentialVerifier> = Box::new(FixedCredentials::default());
    assert!(verifier.verify("user", "pass"));
    assert!(!verifier.verify("user", "nope"));
}

use super::*;

#[test]
fn default_session_is_signed_out() {
    let state = SessionState::default();
    assert!(!state.authenticated);
    assert!(state.user.is_none());
    assert!(state.access_token.is_none());
}

#[test]
fn sign_in_keeps_login_user_and_token() {
    let mut state = SessionState::default();
    let grant = CredentialGrant {
        message: "Login successful".to_owned(),
        user: Some("ada@example.com".to_owned()),
        access_token: Some("tok".to_owned()),
    };
    state.sign_in("typed@example.com", &grant);
    assert!(state.authenticated);
    assert_eq!(state.user.as_deref(), Some("ada@example.com"));
    assert_eq!(state.access_token.as_deref(), Some("tok"));
}

#[test]
fn sign_in_after_register_falls_back_to_submitted_email() {
    let mut state = SessionState::default();
    let grant = CredentialGrant { message: "User registered successfully".to_owned(), ..CredentialGrant::default() };
    state.sign_in("ada@example.com", &grant);
    assert!(state.authenticated);
    assert_eq!(state.user.as_deref(), Some("ada@example.com"));
    assert!(state.access_token.is_none());
}

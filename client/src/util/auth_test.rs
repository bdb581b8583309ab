use super::*;

#[test]
fn should_redirect_when_not_authenticated() {
    assert!(should_redirect_unauth(&SessionState::default()));
}

#[test]
fn should_not_redirect_when_authenticated() {
    let state = SessionState { authenticated: true, ..SessionState::default() };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn token_alone_does_not_admit() {
    let state = SessionState { access_token: Some("tok".to_owned()), ..SessionState::default() };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn redirect_replaces_history_entry() {
    assert!(unauth_redirect_options().replace);
}

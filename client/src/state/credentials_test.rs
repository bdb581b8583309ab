use super::*;

fn filled(mode: AuthMode) -> CredentialFormState {
    CredentialFormState {
        name: "Ada".to_owned(),
        email: " ada@example.com ".to_owned(),
        password: "secret".to_owned(),
        mode,
        ..CredentialFormState::default()
    }
}

// =============================================================
// Mode
// =============================================================

#[test]
fn default_mode_is_register() {
    let form = CredentialFormState::default();
    assert_eq!(form.mode, AuthMode::Register);
    assert_eq!(form.mode.title(), "Register");
    assert_eq!(form.mode.toggle_label(), "Switch to Login");
}

#[test]
fn mode_selects_endpoint() {
    assert_eq!(AuthMode::Register.endpoint(), "/register");
    assert_eq!(AuthMode::Login.endpoint(), "/login");
}

#[test]
fn toggle_keeps_entered_values() {
    let mut form = filled(AuthMode::Register);
    form.toggle_mode();
    assert_eq!(form.mode, AuthMode::Login);
    assert_eq!(form.name, "Ada");
    assert_eq!(form.email, " ada@example.com ");
    assert_eq!(form.password, "secret");
    form.toggle_mode();
    assert_eq!(form.mode, AuthMode::Register);
}

// =============================================================
// Validation
// =============================================================

#[test]
fn register_requires_name() {
    let form = CredentialFormState { name: "  ".to_owned(), ..filled(AuthMode::Register) };
    assert_eq!(form.request(), Err(MissingField::Name));
}

#[test]
fn login_does_not_require_name() {
    let form = CredentialFormState { name: String::new(), ..filled(AuthMode::Login) };
    let req = form.request().unwrap();
    assert!(req.name.is_none());
    assert_eq!(req.email, "ada@example.com");
}

#[test]
fn email_and_password_required_in_both_modes() {
    for mode in [AuthMode::Register, AuthMode::Login] {
        let no_email = CredentialFormState { email: String::new(), ..filled(mode) };
        assert_eq!(no_email.request(), Err(MissingField::Email));
        let no_password = CredentialFormState { password: " ".to_owned(), ..filled(mode) };
        assert_eq!(no_password.request(), Err(MissingField::Password));
    }
}

#[test]
fn register_request_trims_name_and_email_but_not_password() {
    let form = CredentialFormState { password: " pw ".to_owned(), ..filled(AuthMode::Register) };
    let req = form.request().unwrap();
    assert_eq!(req.name.as_deref(), Some("Ada"));
    assert_eq!(req.email, "ada@example.com");
    assert_eq!(req.password, " pw ");
}

// =============================================================
// Submission lifecycle
// =============================================================

#[test]
fn missing_field_does_not_fire() {
    let mut form = CredentialFormState { email: String::new(), ..filled(AuthMode::Login) };
    assert!(form.begin_submit().is_none());
    assert!(!form.busy);
    assert!(form.message.is_none());
}

#[test]
fn begin_submit_marks_busy_and_blocks_second_submit() {
    let mut form = filled(AuthMode::Login);
    form.message = Some(FormMessage::Error("Error: old".to_owned()));
    let (mode, _) = form.begin_submit().unwrap();
    assert_eq!(mode, AuthMode::Login);
    assert!(form.busy);
    assert!(form.message.is_none());
    assert!(form.begin_submit().is_none());
}

#[test]
fn login_success_authenticates_and_requests_navigation() {
    let mut form = filled(AuthMode::Login);
    let mut session = SessionState::default();
    let (_, req) = form.begin_submit().unwrap();
    let grant = CredentialGrant { message: "ok".to_owned(), ..CredentialGrant::default() };

    let navigate = form.finish_submit(&mut session, &req, Ok(grant));

    assert!(navigate);
    assert!(session.authenticated);
    assert!(!form.busy);
    assert_eq!(form.message, Some(FormMessage::Success("ok".to_owned())));
}

#[test]
fn rejected_login_renders_error_detail() {
    let mut form = filled(AuthMode::Login);
    let mut session = SessionState::default();
    let (_, req) = form.begin_submit().unwrap();

    let navigate =
        form.finish_submit(&mut session, &req, Err(ApiError::Rejected("bad credentials".to_owned())));

    assert!(!navigate);
    assert!(!session.authenticated);
    let message = form.message.unwrap();
    assert!(message.is_error());
    assert_eq!(message.text(), "Error: bad credentials");
}

#[test]
fn transport_failure_renders_cause_and_form_stays_usable() {
    let mut form = filled(AuthMode::Register);
    let mut session = SessionState::default();
    let (_, req) = form.begin_submit().unwrap();

    form.finish_submit(&mut session, &req, Err(ApiError::Transport("Failed to fetch".to_owned())));

    assert_eq!(form.message.as_ref().map(FormMessage::text), Some("Error: Failed to fetch"));
    assert!(form.begin_submit().is_some());
}

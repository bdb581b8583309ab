//! Combined register/login form state.
//!
//! DESIGN
//! ======
//! The page keeps one `CredentialFormState` in a signal. Keystrokes write the
//! fields directly; `begin_submit` and `finish_submit` bracket the network
//! call so the transitions stay testable without a browser.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use crate::net::api::{ApiError, LOGIN_ENDPOINT, REGISTER_ENDPOINT};
use crate::net::types::{CredentialGrant, CredentialsRequest};
use crate::state::session::SessionState;

/// Which backend endpoint the form targets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Register,
    Login,
}

impl AuthMode {
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Register => REGISTER_ENDPOINT,
            Self::Login => LOGIN_ENDPOINT,
        }
    }

    /// Heading and submit-button label.
    pub fn title(self) -> &'static str {
        match self {
            Self::Register => "Register",
            Self::Login => "Login",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Register => Self::Login,
            Self::Login => Self::Register,
        }
    }

    pub fn toggle_label(self) -> String {
        format!("Switch to {}", self.toggled().title())
    }

    pub fn requires_name(self) -> bool {
        matches!(self, Self::Register)
    }
}

/// Feedback line under the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormMessage {
    Success(String),
    Error(String),
}

impl FormMessage {
    pub fn text(&self) -> &str {
        match self {
            Self::Success(text) | Self::Error(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// First required field found empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingField {
    Name,
    Email,
    Password,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialFormState {
    pub name: String,
    pub email: String,
    pub password: String,
    pub mode: AuthMode,
    pub message: Option<FormMessage>,
    pub busy: bool,
}

impl CredentialFormState {
    /// Flip register/login. Entered values are kept.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
    }

    /// Build the request body for the current mode.
    ///
    /// # Errors
    ///
    /// Returns the first required field that is empty or whitespace-only.
    pub fn request(&self) -> Result<CredentialsRequest, MissingField> {
        let name = self.name.trim();
        let email = self.email.trim();
        if self.mode.requires_name() && name.is_empty() {
            return Err(MissingField::Name);
        }
        if email.is_empty() {
            return Err(MissingField::Email);
        }
        if self.password.trim().is_empty() {
            return Err(MissingField::Password);
        }
        Ok(CredentialsRequest {
            name: self.mode.requires_name().then(|| name.to_owned()),
            email: email.to_owned(),
            password: self.password.clone(),
        })
    }

    /// Start a submission. Returns `None` (and changes nothing) while another
    /// submission is in flight or when a required field is missing.
    pub fn begin_submit(&mut self) -> Option<(AuthMode, CredentialsRequest)> {
        if self.busy {
            return None;
        }
        let request = self.request().ok()?;
        self.busy = true;
        self.message = None;
        Some((self.mode, request))
    }

    /// Apply the backend's answer. Returns `true` when the caller should
    /// navigate to the query view.
    pub fn finish_submit(
        &mut self,
        session: &mut SessionState,
        request: &CredentialsRequest,
        result: Result<CredentialGrant, ApiError>,
    ) -> bool {
        self.busy = false;
        match result {
            Ok(grant) => {
                session.sign_in(&request.email, &grant);
                self.message = Some(FormMessage::Success(grant.message));
                true
            }
            Err(err) => {
                self.message = Some(FormMessage::Error(credential_error_message(&err)));
                false
            }
        }
    }
}

/// User-visible text for a failed credential submission.
pub fn credential_error_message(err: &ApiError) -> String {
    format!("Error: {err}")
}

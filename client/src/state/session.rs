//! Sign-in state for the current page load.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard on `/insights` and by the query view (for the
//! bearer token). Written only after a successful register or login; never
//! persisted, so a reload starts signed out.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::CredentialGrant;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authenticated: bool,
    /// Email of the signed-in user.
    pub user: Option<String>,
    /// Token issued by `/login`. Held in memory only and not verified.
    pub access_token: Option<String>,
}

impl SessionState {
    /// Mark the session authenticated from a successful credential grant.
    ///
    /// Registration returns no user, so the submitted email stands in.
    pub fn sign_in(&mut self, email: &str, grant: &CredentialGrant) {
        self.authenticated = true;
        self.user = Some(grant.user.clone().unwrap_or_else(|| email.to_owned()));
        self.access_token.clone_from(&grant.access_token);
    }
}

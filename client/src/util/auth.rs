//! Route guard for pages that need a signed-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Purely client-side: the guard trusts the in-memory session flag and never
//! checks a token with the backend, so it is a navigation convenience, not a
//! security boundary.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::app::LOGIN_PATH;
use crate::state::session::SessionState;

pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.authenticated
}

/// Options for the guard's redirect: replace the history entry so Back does
/// not return to the guarded route.
pub fn unauth_redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect to `/` whenever the session is not authenticated.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.get()) {
            navigate(LOGIN_PATH, unauth_redirect_options());
        }
    });
}

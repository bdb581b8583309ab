//! Client state owned by the app root and by each page.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` is provided once as context from `App`; the form, query and
//! summary states live in signals owned by the page that renders them, so
//! they reset whenever that page remounts.

pub mod credentials;
pub mod query;
pub mod session;
pub mod summary;

//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the query view's panels and own their request state,
//! reading the session and client config from Leptos context.

pub mod insight_summary;
pub mod query_box;

//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep routing and rendering glue out of page logic so it
//! can be unit tested on its own.

pub mod auth;
pub mod markdown;

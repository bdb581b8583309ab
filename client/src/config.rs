//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no process environment, so the backend origin and
//! request timeout are baked in at compile time through `option_env!`:
//!
//! - `QUERYDESK_API_BASE`: backend origin, default `http://localhost:8000`
//! - `QUERYDESK_REQUEST_TIMEOUT_MS`: per-request timeout, default 120000

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 120_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base: String,
    pub request_timeout_ms: u32,
}

impl ClientConfig {
    /// Resolve config from the variables captured when the crate was built.
    pub fn from_build_env() -> Self {
        Self::from_raw(option_env!("QUERYDESK_API_BASE"), option_env!("QUERYDESK_REQUEST_TIMEOUT_MS"))
    }

    fn from_raw(api_base: Option<&str>, timeout_ms: Option<&str>) -> Self {
        Self { api_base: parse_api_base(api_base), request_timeout_ms: parse_timeout_ms(timeout_ms) }
    }

    /// Absolute URL for a backend path such as `/query`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_raw(None, None)
    }
}

fn parse_api_base(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(base) if !base.is_empty() => base.trim_end_matches('/').to_owned(),
        _ => DEFAULT_API_BASE.to_owned(),
    }
}

fn parse_timeout_ms(raw: Option<&str>) -> u32 {
    raw.and_then(|v| v.trim().parse::<u32>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS)
}

//! REST helpers for the query backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each raced against
//! the configured timeout.
//! Server-side (SSR): stubs returning `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper returns `Result<_, ApiError>`. The variants separate what the
//! backend said (`Rejected`) from what went wrong on the way (`Transport`,
//! `Decode`, `Timeout`) so each view can pick its own wording.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{CredentialGrant, CredentialsRequest, InsightsResponse, QueryRequest, QueryResponse};
use crate::config::ClientConfig;

pub const REGISTER_ENDPOINT: &str = "/register";
pub const LOGIN_ENDPOINT: &str = "/login";
pub const QUERY_ENDPOINT: &str = "/query";
pub const INSIGHTS_ENDPOINT: &str = "/insights";

/// Fallback text when a rejected request carries no usable `detail`.
pub const GENERIC_FAILURE: &str = "Something went wrong";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Backend answered with a failure status; holds its `detail` text.
    #[error("{0}")]
    Rejected(String),
    /// The request never completed (DNS, refused connection, CORS).
    #[error("{0}")]
    Transport(String),
    /// The response body was not the JSON we expected.
    #[error("{0}")]
    Decode(String),
    #[error("request timed out")]
    Timeout,
    #[error("not available on server")]
    Unavailable,
}

/// Text of a failure body's `detail` field.
///
/// Strings are used verbatim; structured details (e.g. a validation error
/// list) are shown as JSON; missing, null or empty details fall back to
/// [`GENERIC_FAILURE`].
#[cfg(any(test, feature = "hydrate"))]
fn detail_message(body: &serde_json::Value) -> String {
    match body.get("detail") {
        Some(serde_json::Value::String(detail)) if !detail.is_empty() => detail.clone(),
        None | Some(serde_json::Value::Null | serde_json::Value::String(_)) => GENERIC_FAILURE.to_owned(),
        Some(other) => other.to_string(),
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn interpret_credential_response(ok: bool, body: serde_json::Value) -> Result<CredentialGrant, ApiError> {
    if !ok {
        return Err(ApiError::Rejected(detail_message(&body)));
    }
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn interpret_query_response(ok: bool, body: serde_json::Value) -> Result<QueryResponse, ApiError> {
    let parsed: QueryResponse = serde_json::from_value(body.clone()).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !ok && parsed.result.is_none() && parsed.error.is_none() {
        return Err(ApiError::Rejected(detail_message(&body)));
    }
    Ok(parsed)
}

#[cfg(any(test, feature = "hydrate"))]
fn interpret_insights_response(ok: bool, body: serde_json::Value) -> Result<InsightsResponse, ApiError> {
    if !ok {
        return Err(ApiError::Rejected(detail_message(&body)));
    }
    serde_json::from_value(body).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(feature = "hydrate")]
async fn with_timeout<T, F>(timeout_ms: u32, fut: F) -> Result<T, ApiError>
where
    F: std::future::Future<Output = Result<T, ApiError>>,
{
    use futures::future::{Either, select};

    let fut = std::pin::pin!(fut);
    let timer = std::pin::pin!(gloo_timers::future::TimeoutFuture::new(timeout_ms));
    match select(fut, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(ApiError::Timeout),
    }
}

#[cfg(feature = "hydrate")]
async fn read_json(resp: gloo_net::http::Response) -> Result<(bool, serde_json::Value), ApiError> {
    let ok = resp.ok();
    let body = resp
        .json::<serde_json::Value>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok((ok, body))
}

/// Submit credentials to `/register` or `/login` (`endpoint`).
///
/// # Errors
///
/// `Rejected` with the backend's `detail` on a non-2xx status; `Transport`,
/// `Decode` or `Timeout` when no usable answer arrived.
pub async fn submit_credentials(
    config: &ClientConfig,
    endpoint: &str,
    request: &CredentialsRequest,
) -> Result<CredentialGrant, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(endpoint);
        with_timeout(config.request_timeout_ms, async {
            let resp = gloo_net::http::Request::post(&url)
                .json(request)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let (ok, body) = read_json(resp).await?;
            interpret_credential_response(ok, body)
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, endpoint, request);
        Err(ApiError::Unavailable)
    }
}

/// Ask the backend to translate and run a natural-language question.
///
/// `access_token`, when present, is forwarded as a bearer token.
///
/// # Errors
///
/// `Transport`, `Decode` or `Timeout` when no usable answer arrived;
/// `Rejected` when a failure status carried neither `result` nor `error`.
pub async fn ask_query(
    config: &ClientConfig,
    access_token: Option<&str>,
    request: &QueryRequest,
) -> Result<QueryResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(QUERY_ENDPOINT);
        with_timeout(config.request_timeout_ms, async {
            let mut builder = gloo_net::http::Request::post(&url);
            if let Some(token) = access_token {
                builder = builder.header("Authorization", &bearer_header(token));
            }
            let resp = builder
                .json(request)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let (ok, body) = read_json(resp).await?;
            interpret_query_response(ok, body)
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, access_token, request);
        Err(ApiError::Unavailable)
    }
}

/// Fetch the canned store/SKU summary from `GET /insights`.
///
/// # Errors
///
/// Same taxonomy as [`submit_credentials`].
pub async fn fetch_insights(config: &ClientConfig) -> Result<InsightsResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = config.endpoint(INSIGHTS_ENDPOINT);
        with_timeout(config.request_timeout_ms, async {
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let (ok, body) = read_json(resp).await?;
            interpret_insights_response(ok, body)
        })
        .await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = config;
        Err(ApiError::Unavailable)
    }
}

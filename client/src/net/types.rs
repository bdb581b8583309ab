//! Wire DTOs for the query backend's JSON endpoints.
//!
//! DESIGN
//! ======
//! Request bodies serialize exactly the fields each endpoint documents.
//! Response bodies are lenient: every field the backend may omit is optional
//! so a partial body still decodes and the caller decides what to show.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// Body for `POST /register` and `POST /login`.
///
/// `name` is only sent when registering.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CredentialsRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

/// Successful body from `/register` or `/login`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct CredentialGrant {
    /// Human-readable confirmation.
    #[serde(default)]
    pub message: String,
    /// Email of the signed-in user (login only).
    pub user: Option<String>,
    /// Backend session token (login only).
    pub access_token: Option<String>,
}

/// Body for `POST /query`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct QueryRequest {
    pub query: String,
}

/// Body returned by `POST /query`.
///
/// The backend answers 200 even for query-level failures, carrying `error`
/// instead of `result`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct QueryResponse {
    /// Generated SQL text.
    pub sql: Option<String>,
    /// Rows returned by executing the SQL.
    pub result: Option<serde_json::Value>,
    /// Query-level failure message.
    pub error: Option<String>,
}

/// Body returned by `GET /insights`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct InsightsResponse {
    /// Plain-English summary, may contain Markdown.
    pub summary: Option<String>,
    #[serde(default)]
    pub stores: Vec<StoreAvailability>,
    #[serde(default)]
    pub skus: Vec<SkuSales>,
    pub error: Option<String>,
}

/// A store ranked by average on-shelf availability.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreAvailability {
    #[serde(deserialize_with = "deserialize_id_string")]
    pub store_id: String,
    #[serde(default)]
    pub store_name: String,
    pub on_shelf_availability: f64,
}

/// A SKU ranked by units sold.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SkuSales {
    #[serde(deserialize_with = "deserialize_id_string")]
    pub sku_id: String,
    #[serde(default)]
    pub sku_name: String,
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub units_sold: i64,
}

/// Identifiers arrive as integers or strings depending on the table.
fn deserialize_id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}

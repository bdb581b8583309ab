//! Question/answer state for the query box.
//!
//! DESIGN
//! ======
//! Each submitted question takes the next sequence number. A response is
//! committed only if its number is still the latest, so a slow earlier
//! answer can never overwrite a newer one. No history is kept.

#[cfg(test)]
#[path = "query_test.rs"]
mod query_test;

use crate::net::api::ApiError;
use crate::net::types::{QueryRequest, QueryResponse};

pub const FAILED_TO_CONNECT: &str = "Failed to connect to server.";
pub const TIMED_OUT: &str = "Request timed out.";

/// What the response panel shows.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryDisplay {
    /// Rows returned by the backend.
    Rows(serde_json::Value),
    /// Query-level or transport error text.
    Error(String),
}

impl QueryDisplay {
    /// Rows as pretty-printed JSON, errors verbatim.
    pub fn render(&self) -> String {
        match self {
            Self::Rows(value) => serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string()),
            Self::Error(text) => text.clone(),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

/// Text shown when a request produced no usable body.
pub fn failure_text(err: &ApiError) -> String {
    match err {
        ApiError::Rejected(detail) => detail.clone(),
        ApiError::Timeout => TIMED_OUT.to_owned(),
        ApiError::Transport(_) | ApiError::Decode(_) | ApiError::Unavailable => FAILED_TO_CONNECT.to_owned(),
    }
}

/// Result of one request, ready to commit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryOutcome {
    pub sql: Option<String>,
    pub display: Option<QueryDisplay>,
}

impl QueryOutcome {
    pub fn from_result(result: Result<QueryResponse, ApiError>) -> Self {
        match result {
            Ok(resp) => {
                let display = match (resp.result, resp.error) {
                    (Some(rows), _) => Some(QueryDisplay::Rows(rows)),
                    (None, Some(error)) => Some(QueryDisplay::Error(error)),
                    (None, None) => None,
                };
                Self { sql: resp.sql.filter(|sql| !sql.is_empty()), display }
            }
            Err(err) => Self { sql: None, display: Some(QueryDisplay::Error(failure_text(&err))) },
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryState {
    /// Current contents of the question input.
    pub query: String,
    pub sql: Option<String>,
    pub response: Option<QueryDisplay>,
    pub pending: bool,
    /// Sequence number of the most recently issued request.
    pub latest_seq: u64,
}

impl QueryState {
    /// Whether the Ask button is enabled.
    pub fn can_submit(&self) -> bool {
        !self.pending && !self.query.trim().is_empty()
    }

    /// Issue a new request for the current question.
    ///
    /// Clears the previous SQL and response. Returns `None` for a blank
    /// question. A request already in flight is superseded, not awaited.
    pub fn begin(&mut self) -> Option<(u64, QueryRequest)> {
        let query = self.query.trim();
        if query.is_empty() {
            return None;
        }
        let request = QueryRequest { query: query.to_owned() };
        self.latest_seq += 1;
        self.pending = true;
        self.sql = None;
        self.response = None;
        Some((self.latest_seq, request))
    }

    /// Commit the outcome of request `seq`. Stale outcomes are dropped and
    /// `false` is returned.
    pub fn commit(&mut self, seq: u64, outcome: QueryOutcome) -> bool {
        if seq != self.latest_seq {
            return false;
        }
        self.sql = outcome.sql;
        self.response = outcome.display;
        self.pending = false;
        true
    }
}

//! State for the on-demand store/SKU summary panel.

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;

use crate::net::api::ApiError;
use crate::net::types::InsightsResponse;
use crate::state::query::failure_text;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SummaryState {
    pub loading: bool,
    pub data: Option<InsightsResponse>,
    pub error: Option<String>,
}

impl SummaryState {
    /// Start a load. Returns `false` if one is already running.
    pub fn begin(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        self.error = None;
        true
    }

    pub fn finish(&mut self, result: Result<InsightsResponse, ApiError>) {
        self.loading = false;
        match result {
            Ok(resp) => {
                if let Some(error) = resp.error {
                    self.data = None;
                    self.error = Some(error);
                } else {
                    self.data = Some(resp);
                }
            }
            Err(err) => {
                self.data = None;
                self.error = Some(failure_text(&err));
            }
        }
    }
}

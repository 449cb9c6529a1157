//! Execution status reported back to the host framework.

use serde::Serialize;
use std::fmt;

/// Status of a statement execution.
///
/// The native driver exposes no row counts or status codes beyond "no
/// exception raised", so the message is always `OK`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdapterResponse {
    pub message: String,
    pub code: Option<String>,
    pub rows_affected: Option<i64>,
}

impl AdapterResponse {
    /// Successful execution.
    pub fn ok() -> Self {
        Self {
            message: "OK".to_string(),
            code: None,
            rows_affected: None,
        }
    }
}

impl fmt::Display for AdapterResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

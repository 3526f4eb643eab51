//! API allowance (quota) returned by `/api_allowance`.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AllowanceResponse {
    pub allowance: Allowance,
}

/// Calls used and permitted within the current window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Allowance {
    /// Calls made so far in this window.
    pub count: i64,
    /// Calls permitted per window.
    pub limit: i64,
    /// Window type, e.g. `daily`.
    #[serde(rename = "type")]
    pub allowance_type: String,
}

impl Allowance {
    /// Calls left before the API starts answering 429.
    pub fn remaining(&self) -> i64 {
        (self.limit - self.count).max(0)
    }
}

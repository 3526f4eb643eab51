//! National and municipal load-shedding status returned by `/status`.

use std::collections::BTreeMap;

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    /// Keyed by provider, e.g. `eskom` or `capetown`.
    pub status: BTreeMap<String, ProviderStatus>,
}

impl StatusResponse {
    pub fn eskom(&self) -> Option<&ProviderStatus> {
        self.status.get("eskom")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderStatus {
    pub name: String,
    /// Current stage as sent by the API, e.g. `"2"`.
    pub stage: String,
    pub stage_updated: Option<DateTime<FixedOffset>>,
    #[serde(default)]
    pub next_stages: Vec<NextStage>,
}

impl ProviderStatus {
    pub fn stage_number(&self) -> Option<u8> {
        self.stage.trim().parse().ok()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextStage {
    pub stage: String,
    pub stage_start_timestamp: DateTime<FixedOffset>,
}

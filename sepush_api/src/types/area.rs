//! Area types: search and nearby results, plus the per-area schedule.

use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};

/// Identifier used by the `/area` endpoint, e.g. `eskde-10-fourwaysext10cityofjohannesburggauteng`.
pub type AreaID = String;

/// Body of `/areas_search` and `/areas_nearby`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreasResponse {
    pub areas: Vec<AreaSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AreaSummary {
    pub id: AreaID,
    pub name: String,
    pub region: Option<String>,
    /// Number of users following the area. Only sent by `/areas_nearby`; `-1` when hidden.
    pub count: Option<i64>,
}

/// Body of `/area`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaInformation {
    #[serde(default)]
    pub events: Vec<Event>,
    pub info: AreaInfo,
    pub schedule: Schedule,
}

/// An upcoming outage window.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    /// Free text such as `Stage 2`.
    pub note: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AreaInfo {
    pub name: String,
    pub region: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub days: Vec<ScheduleDay>,
    pub source: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleDay {
    pub date: NaiveDate,
    pub name: String,
    /// Outage windows per stage: index 0 is stage 1. Each window reads `HH:MM-HH:MM`.
    pub stages: Vec<Vec<String>>,
}

impl ScheduleDay {
    /// Windows for a 1-based stage, empty for stage 0 or unknown stages.
    pub fn windows_for_stage(&self, stage: usize) -> &[String] {
        stage
            .checked_sub(1)
            .and_then(|i| self.stages.get(i))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

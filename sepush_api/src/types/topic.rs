//! Community topics returned by `/topics_nearby`.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicsResponse {
    pub topics: Vec<Topic>,
}

/// A user-submitted post near the requested coordinate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    /// Time of the latest activity on the topic.
    pub active: DateTime<FixedOffset>,
    pub body: String,
    /// e.g. `electricity` or `information`.
    pub category: String,
    /// Distance from the requested coordinate in kilometres.
    pub distance: f64,
    pub followers: i64,
    pub timestamp: DateTime<FixedOffset>,
}

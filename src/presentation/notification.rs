use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A notification addressed to the current user
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    /// Notification identifier
    pub id: i64,
    /// Task the notification is about
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task: Option<i64>,
    /// What happened, e.g. `assigned` or `status_change`
    #[serde(default)]
    pub verb: String,
    /// Whether the user has already seen it
    #[serde(default)]
    pub read: bool,
    /// When it was raised
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

fn default_status() -> String {
    String::from("pending")
}

/// Entry of the simplified, unauthenticated `/cleaning-tasks/` endpoint
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct CleaningTask {
    /// Task identifier
    pub id: i64,
    /// Free-text property name
    pub property_name: String,
    /// Status string, `pending` when absent
    #[serde(default = "default_status")]
    pub status: String,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

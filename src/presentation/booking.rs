use chrono::NaiveDate;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

fn default_status() -> String {
    String::from("confirmed")
}

/// A guest reservation on a property
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    /// Booking identifier
    pub id: i64,
    /// Booked property
    pub property: i64,
    /// Arrival date
    pub check_in_date: NaiveDate,
    /// Departure date
    pub check_out_date: NaiveDate,
    /// Guest name
    pub guest_name: String,
    /// Guest email or phone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub guest_contact: Option<String>,
    /// Booking status, `confirmed` when absent
    #[serde(default = "default_status")]
    pub status: String,
}

impl Booking {
    /// Number of nights between check-in and check-out
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out_date - self.check_in_date).num_days()
    }
}

use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};

/// A backend user, used for identity and authorization display
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// User identifier
    pub id: i64,
    /// Login name
    pub username: String,
    /// Contact address, when the backend exposes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Whether the user belongs to staff
    #[serde(default)]
    pub is_staff: bool,
    /// Whether the user has every permission
    #[serde(default)]
    pub is_superuser: bool,
}

impl User {
    /// Name to show in listings: the username, followed by the email when known
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.email {
            Some(email) if !email.is_empty() => format!("{} <{}>", self.username, email),
            _ => self.username.clone(),
        }
    }
}

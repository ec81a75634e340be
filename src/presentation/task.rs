/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::presentation::task_image::TaskImage;
use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Task status
///
/// The set of statuses is defined by the server. Known values map to named
/// variants; anything else is kept verbatim in [`TaskStatus::Other`] so that
/// it survives a decode / encode cycle unchanged.
///
/// Build statuses from strings with [`TaskStatus::from`], which picks the
/// named variant for known values. A hand-made `Other("pending")` encodes as
/// `"pending"` and decodes back as [`TaskStatus::Pending`], so it does not
/// compare equal after a round trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started yet
    #[default]
    Pending,
    /// Work has started
    InProgress,
    /// Work is done
    Completed,
    /// Task was called off
    Canceled,
    /// Any status this client does not know about. Never holds a known value
    /// when built through `From<&str>`
    #[serde(untagged)]
    Other(String),
}

impl TaskStatus {
    /// Wire representation of the status
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
            TaskStatus::Canceled => "canceled",
            TaskStatus::Other(s) => s,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TaskStatus {
    fn from(s: &str) -> Self {
        match s {
            "pending" => TaskStatus::Pending,
            "in-progress" => TaskStatus::InProgress,
            "completed" => TaskStatus::Completed,
            "canceled" => TaskStatus::Canceled,
            other => TaskStatus::Other(other.to_string()),
        }
    }
}

/// Kind of work a task represents
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskType {
    /// Turnover cleaning
    #[default]
    Cleaning,
    /// Repairs and upkeep
    Maintenance,
    /// Any type this client does not know about. Prefer `TaskType::from`
    #[serde(untagged)]
    Other(String),
}

impl TaskType {
    /// Wire representation of the type
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            TaskType::Cleaning => "cleaning",
            TaskType::Maintenance => "maintenance",
            TaskType::Other(s) => s,
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for TaskType {
    fn from(s: &str) -> Self {
        match s {
            "cleaning" => TaskType::Cleaning,
            "maintenance" => TaskType::Maintenance,
            other => TaskType::Other(other.to_string()),
        }
    }
}

/// A unit of work on a property
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    /// Task identifier
    pub id: i64,
    /// Property the task belongs to
    pub property: i64,
    /// Short title
    pub title: String,
    /// Booking that triggered the task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking: Option<i64>,
    /// Longer description
    #[serde(default)]
    pub description: String,
    /// Kind of work
    #[serde(default)]
    pub task_type: TaskType,
    /// Current status
    #[serde(default)]
    pub status: TaskStatus,
    /// User who created the task
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<i64>,
    /// User the task is assigned to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i64>,
    /// Deadline
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last modification timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_at: Option<DateTime<Utc>>,
    /// Images attached to the task
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<TaskImage>,
}

impl Task {
    /// Whether the task no longer needs work
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.status, TaskStatus::Completed | TaskStatus::Canceled)
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Request payloads.
//!
//! Creates and partial updates are typed records rather than free-form maps,
//! so a malformed payload is rejected by [`Validate::validate`] before any
//! network call. `None` fields are left out of the JSON body, which is what
//! makes the update records partial.

use crate::error::AppError;
use crate::presentation::task::{TaskStatus, TaskType};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Checks a payload before it is sent
pub trait Validate {
    /// Returns [`AppError::InvalidInput`] describing the first problem found
    fn validate(&self) -> Result<(), AppError>;
}

fn require_text(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidInput(format!("{field} must not be empty")));
    }
    Ok(())
}

fn require_id(field: &str, value: i64) -> Result<(), AppError> {
    if value <= 0 {
        return Err(AppError::InvalidInput(format!(
            "{field} must be a positive id, got {value}"
        )));
    }
    Ok(())
}

fn require_some_field(resource: &str, any_set: bool) -> Result<(), AppError> {
    if !any_set {
        return Err(AppError::InvalidInput(format!(
            "{resource} update carries no fields"
        )));
    }
    Ok(())
}

/// Payload for `POST /properties/`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewProperty {
    /// Display name
    pub name: String,
    /// Street address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl NewProperty {
    /// Creates a payload with the required name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

impl Validate for NewProperty {
    fn validate(&self) -> Result<(), AppError> {
        require_text("name", &self.name)
    }
}

/// Payload for `PATCH /properties/{id}/`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PropertyUpdate {
    /// New display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New street address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl PropertyUpdate {
    /// Creates an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

impl Validate for PropertyUpdate {
    fn validate(&self) -> Result<(), AppError> {
        require_some_field("property", self.name.is_some() || self.address.is_some())?;
        if let Some(name) = &self.name {
            require_text("name", name)?;
        }
        Ok(())
    }
}

/// Payload for `POST /tasks/`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewTask {
    /// Property the task belongs to
    pub property: i64,
    /// Short title
    pub title: String,
    /// Kind of work
    pub task_type: TaskType,
    /// Longer description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Booking that triggered the task
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<i64>,
    /// Assignee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i64>,
    /// Initial status; the server defaults to `pending`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// Deadline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl NewTask {
    /// Creates a payload with the required fields
    pub fn new(property: i64, title: impl Into<String>, task_type: TaskType) -> Self {
        Self {
            property,
            title: title.into(),
            task_type,
            ..Default::default()
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the booking
    pub fn with_booking(mut self, booking: i64) -> Self {
        self.booking = Some(booking);
        self
    }

    /// Set the assignee
    pub fn with_assigned_to(mut self, user_id: i64) -> Self {
        self.assigned_to = Some(user_id);
        self
    }

    /// Set the initial status
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the deadline
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

impl Validate for NewTask {
    fn validate(&self) -> Result<(), AppError> {
        require_id("property", self.property)?;
        require_text("title", &self.title)?;
        require_text("task_type", self.task_type.as_str())?;
        if let Some(booking) = self.booking {
            require_id("booking", booking)?;
        }
        if let Some(user) = self.assigned_to {
            require_id("assigned_to", user)?;
        }
        Ok(())
    }
}

/// Payload for `PATCH /tasks/{id}/`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TaskUpdate {
    /// New title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// New description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    /// New kind of work
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_type: Option<TaskType>,
    /// New assignee
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i64>,
    /// New deadline
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}

impl TaskUpdate {
    /// Creates an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the kind of work
    pub fn with_task_type(mut self, task_type: TaskType) -> Self {
        self.task_type = Some(task_type);
        self
    }

    /// Set the assignee
    pub fn with_assigned_to(mut self, user_id: i64) -> Self {
        self.assigned_to = Some(user_id);
        self
    }

    /// Set the deadline
    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }
}

impl Validate for TaskUpdate {
    fn validate(&self) -> Result<(), AppError> {
        let any_set = self.title.is_some()
            || self.description.is_some()
            || self.status.is_some()
            || self.task_type.is_some()
            || self.assigned_to.is_some()
            || self.due_date.is_some();
        require_some_field("task", any_set)?;
        if let Some(title) = &self.title {
            require_text("title", title)?;
        }
        if let Some(status) = &self.status {
            require_text("status", status.as_str())?;
        }
        if let Some(user) = self.assigned_to {
            require_id("assigned_to", user)?;
        }
        Ok(())
    }
}

/// Query filters for `GET /tasks/`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    /// Only tasks in this status
    pub status: Option<TaskStatus>,
    /// Only tasks of this property
    pub property: Option<i64>,
    /// Only tasks assigned to this user
    pub assigned_to: Option<i64>,
}

impl TaskFilter {
    /// Creates a filter that matches every task
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the property
    pub fn with_property(mut self, property: i64) -> Self {
        self.property = Some(property);
        self
    }

    /// Set the assignee
    pub fn with_assigned_to(mut self, user_id: i64) -> Self {
        self.assigned_to = Some(user_id);
        self
    }

    /// Query string pairs, in a stable order
    #[must_use]
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(status) = &self.status {
            query.push(("status", status.as_str().to_string()));
        }
        if let Some(property) = self.property {
            query.push(("property", property.to_string()));
        }
        if let Some(user) = self.assigned_to {
            query.push(("assigned_to", user.to_string()));
        }
        query
    }
}

/// Payload for `POST /bookings/`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewBooking {
    /// Booked property
    pub property: i64,
    /// Arrival date
    pub check_in_date: NaiveDate,
    /// Departure date
    pub check_out_date: NaiveDate,
    /// Guest name
    pub guest_name: String,
    /// Guest email or phone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_contact: Option<String>,
}

impl NewBooking {
    /// Creates a payload with the required fields
    pub fn new(
        property: i64,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
        guest_name: impl Into<String>,
    ) -> Self {
        Self {
            property,
            check_in_date,
            check_out_date,
            guest_name: guest_name.into(),
            guest_contact: None,
        }
    }

    /// Set the guest contact
    pub fn with_guest_contact(mut self, contact: impl Into<String>) -> Self {
        self.guest_contact = Some(contact.into());
        self
    }
}

impl Validate for NewBooking {
    fn validate(&self) -> Result<(), AppError> {
        require_id("property", self.property)?;
        require_text("guest_name", &self.guest_name)?;
        if self.check_out_date < self.check_in_date {
            return Err(AppError::InvalidInput(format!(
                "check_out_date {} is before check_in_date {}",
                self.check_out_date, self.check_in_date
            )));
        }
        Ok(())
    }
}

/// Payload for `PATCH /bookings/{id}/`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BookingUpdate {
    /// New arrival date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_in_date: Option<NaiveDate>,
    /// New departure date
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_out_date: Option<NaiveDate>,
    /// New guest name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_name: Option<String>,
    /// New guest contact
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guest_contact: Option<String>,
    /// New status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl BookingUpdate {
    /// Creates an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set both stay dates
    pub fn with_dates(mut self, check_in_date: NaiveDate, check_out_date: NaiveDate) -> Self {
        self.check_in_date = Some(check_in_date);
        self.check_out_date = Some(check_out_date);
        self
    }

    /// Set the guest name
    pub fn with_guest_name(mut self, guest_name: impl Into<String>) -> Self {
        self.guest_name = Some(guest_name.into());
        self
    }

    /// Set the guest contact
    pub fn with_guest_contact(mut self, contact: impl Into<String>) -> Self {
        self.guest_contact = Some(contact.into());
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

impl Validate for BookingUpdate {
    fn validate(&self) -> Result<(), AppError> {
        let any_set = self.check_in_date.is_some()
            || self.check_out_date.is_some()
            || self.guest_name.is_some()
            || self.guest_contact.is_some()
            || self.status.is_some();
        require_some_field("booking", any_set)?;
        if let Some(name) = &self.guest_name {
            require_text("guest_name", name)?;
        }
        // only comparable when both ends are sent
        if let (Some(check_in), Some(check_out)) = (self.check_in_date, self.check_out_date) {
            if check_out < check_in {
                return Err(AppError::InvalidInput(format!(
                    "check_out_date {check_out} is before check_in_date {check_in}"
                )));
            }
        }
        Ok(())
    }
}

/// Payload for `POST /cleaning-tasks/`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewCleaningTask {
    /// Free-text property name
    pub property_name: String,
    /// Initial status; the server defaults to `pending`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl NewCleaningTask {
    /// Creates a payload for the named property
    pub fn new(property_name: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            status: None,
        }
    }

    /// Set the status
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}

impl Validate for NewCleaningTask {
    fn validate(&self) -> Result<(), AppError> {
        require_text("property_name", &self.property_name)?;
        if self.property_name.chars().count() > 100 {
            return Err(AppError::InvalidInput(
                "property_name must be at most 100 characters".to_string(),
            ));
        }
        Ok(())
    }
}

/// Payload for self-registration and for staff-created accounts
#[derive(Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewUser {
    /// Login name
    pub username: String,
    /// Contact address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Initial password
    pub password: String,
    /// Staff flag; only honored on the admin endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_staff: Option<bool>,
}

impl NewUser {
    /// Creates a payload with the required fields
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            ..Default::default()
        }
    }

    /// Set the email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Set the staff flag
    pub fn with_staff(mut self, is_staff: bool) -> Self {
        self.is_staff = Some(is_staff);
        self
    }
}

// keeps the password out of logs
impl fmt::Debug for NewUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"***")
            .field("is_staff", &self.is_staff)
            .finish()
    }
}

impl Validate for NewUser {
    fn validate(&self) -> Result<(), AppError> {
        require_text("username", &self.username)?;
        require_text("password", &self.password)?;
        if let Some(email) = &self.email {
            let well_formed = email
                .split_once('@')
                .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
            if !well_formed {
                return Err(AppError::InvalidInput(format!("email {email} is not valid")));
            }
        }
        Ok(())
    }
}

/// Payload registering a device for push notifications
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewDevice {
    /// Push token issued by the messaging provider
    pub token: String,
}

impl NewDevice {
    /// Creates a payload for `token`
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl Validate for NewDevice {
    fn validate(&self) -> Result<(), AppError> {
        require_text("token", &self.token)
    }
}

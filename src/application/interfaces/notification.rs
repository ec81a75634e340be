use crate::error::AppError;
use crate::model::requests::NewDevice;
use crate::model::responses::{DeviceRegistration, Page};
use crate::presentation::notification::Notification;
use async_trait::async_trait;

/// Interface for notifications and push device registration
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Lists the current user's notifications
    ///
    /// # Arguments
    /// * `next` - `next` URL of a previous page, or `None` for the first page
    async fn list_notifications(&self, next: Option<&str>)
    -> Result<Page<Notification>, AppError>;

    /// Registers a push token for the current user. Accepts 200 or 201
    async fn register_device(&self, device: &NewDevice) -> Result<DeviceRegistration, AppError>;
}

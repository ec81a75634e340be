/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::interfaces::booking::BookingService;
use crate::application::interfaces::cleaning_task::CleaningTaskService;
use crate::application::interfaces::notification::NotificationService;
use crate::application::interfaces::property::PropertyService;
use crate::application::interfaces::task::TaskService;
use crate::application::interfaces::user::UserService;
use crate::error::AppError;
use crate::model::http::{Access, HttpClient};
use crate::model::requests::{
    BookingUpdate, NewBooking, NewCleaningTask, NewDevice, NewProperty, NewTask, NewUser,
    PropertyUpdate, TaskFilter, TaskUpdate, Validate,
};
use crate::model::responses::{DeviceRegistration, Page};
use crate::model::utils::{collection_path, detail_path};
use crate::presentation::booking::Booking;
use crate::presentation::cleaning_task::CleaningTask;
use crate::presentation::notification::Notification;
use crate::presentation::property::Property;
use crate::presentation::task::Task;
use crate::presentation::user::User;
use crate::storage::credential::{CredentialProvider, StoredCredential};
use crate::storage::store::FileStore;
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

const PROPERTIES: &str = "properties";
const TASKS: &str = "tasks";
const USERS: &str = "users";
const BOOKINGS: &str = "bookings";
const CLEANING_TASKS: &str = "cleaning-tasks";
const NOTIFICATIONS: &str = "notifications";
const CURRENT_USER: &str = "users/me/";
const REGISTER_USER: &str = "users/register/";
const ADMIN_CREATE_USER: &str = "admin/create-user/";
const DEVICES: &str = "devices/";

/// Client for the AriStay API
///
/// Implements every service interface over a shared [`HttpClient`]. The
/// client holds no entity state; cloning it is cheap and clones share the
/// connection pool.
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client reading its token from `credentials`
    ///
    /// # Errors
    /// [`AppError::Network`] if the HTTP client cannot be built
    pub fn new(
        config: Config,
        credentials: impl CredentialProvider + 'static,
    ) -> Result<Self, AppError> {
        Self::with_provider(Arc::new(config), Arc::new(credentials))
    }

    /// Creates a client from an already shared configuration and provider
    pub fn with_provider(
        config: Arc<Config>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Result<Self, AppError> {
        let http_client = Arc::new(HttpClient::new(config, credentials)?);
        Ok(Self { http_client })
    }

    /// Creates a client whose token lives in the preferences file named by
    /// `config.storage.path`
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let store = FileStore::new(&config.storage.path);
        Self::new(config, StoredCredential::new(store))
    }

    /// Underlying transport
    pub fn http_client(&self) -> &HttpClient {
        &self.http_client
    }
}

#[async_trait]
impl PropertyService for Client {
    async fn list_properties(&self, next: Option<&str>) -> Result<Page<Property>, AppError> {
        info!("Listing properties");
        let page: Page<Property> = self
            .http_client
            .list(&collection_path(PROPERTIES), &[], next, Access::Authenticated)
            .await?;
        debug!("Properties obtained: {} properties", page.len());
        Ok(page)
    }

    async fn get_property(&self, id: i64) -> Result<Property, AppError> {
        info!("Getting property {}", id);
        self.http_client.retrieve(&detail_path(PROPERTIES, id)).await
    }

    async fn create_property(&self, property: &NewProperty) -> Result<Property, AppError> {
        property.validate()?;
        info!("Creating property: {}", property.name);
        let created: Property = self
            .http_client
            .create(&collection_path(PROPERTIES), property, Access::Authenticated)
            .await?;
        debug!("Property created with id {}", created.id);
        Ok(created)
    }

    async fn update_property(&self, id: i64, update: &PropertyUpdate) -> Result<(), AppError> {
        update.validate()?;
        info!("Updating property {}", id);
        self.http_client.update(&detail_path(PROPERTIES, id), update).await
    }

    async fn delete_property(&self, id: i64) -> Result<(), AppError> {
        info!("Deleting property {}", id);
        self.http_client.delete(&detail_path(PROPERTIES, id)).await
    }
}

#[async_trait]
impl TaskService for Client {
    async fn list_tasks(&self, next: Option<&str>) -> Result<Page<Task>, AppError> {
        info!("Listing tasks");
        let page: Page<Task> = self
            .http_client
            .list(&collection_path(TASKS), &[], next, Access::Authenticated)
            .await?;
        debug!("Tasks obtained: {} tasks", page.len());
        Ok(page)
    }

    async fn list_tasks_filtered(&self, filter: &TaskFilter) -> Result<Page<Task>, AppError> {
        let query = filter.to_query();
        info!("Listing tasks with filter {:?}", query);
        let page: Page<Task> = self
            .http_client
            .list(&collection_path(TASKS), &query, None, Access::Authenticated)
            .await?;
        debug!("Tasks obtained: {} tasks", page.len());
        Ok(page)
    }

    async fn get_task(&self, id: i64) -> Result<Task, AppError> {
        info!("Getting task {}", id);
        self.http_client.retrieve(&detail_path(TASKS, id)).await
    }

    async fn create_task(&self, task: &NewTask) -> Result<Task, AppError> {
        task.validate()?;
        info!("Creating task '{}' on property {}", task.title, task.property);
        let created: Task = self
            .http_client
            .create(&collection_path(TASKS), task, Access::Authenticated)
            .await?;
        debug!("Task created with id {} ({})", created.id, created.status);
        Ok(created)
    }

    async fn update_task(&self, id: i64, update: &TaskUpdate) -> Result<(), AppError> {
        update.validate()?;
        info!("Updating task {}", id);
        self.http_client.update(&detail_path(TASKS, id), update).await
    }

    async fn delete_task(&self, id: i64) -> Result<(), AppError> {
        info!("Deleting task {}", id);
        self.http_client.delete(&detail_path(TASKS, id)).await
    }

    async fn upload_task_image(
        &self,
        task_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), AppError> {
        if file_name.trim().is_empty() {
            return Err(AppError::InvalidInput("file name must not be empty".to_string()));
        }
        info!("Uploading image {} to task {}", file_name, task_id);
        let path = format!("{}images/", detail_path(TASKS, task_id));
        self.http_client.upload(&path, file_name, bytes).await
    }

    async fn upload_task_image_from_path(&self, task_id: i64, path: &Path) -> Result<(), AppError> {
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                AppError::InvalidInput(format!("{} has no usable file name", path.display()))
            })?
            .to_string();
        let bytes = tokio::fs::read(path).await?;
        self.upload_task_image(task_id, &file_name, bytes).await
    }
}

#[async_trait]
impl UserService for Client {
    async fn list_users(&self, next: Option<&str>) -> Result<Page<User>, AppError> {
        info!("Listing users");
        let page: Page<User> = self
            .http_client
            .list(&collection_path(USERS), &[], next, Access::Authenticated)
            .await?;
        debug!("Users obtained: {} users", page.len());
        Ok(page)
    }

    async fn current_user(&self) -> Result<User, AppError> {
        info!("Getting current user");
        let user: User = self.http_client.retrieve(CURRENT_USER).await?;
        debug!("Current user is {} (staff: {})", user.username, user.is_staff);
        Ok(user)
    }

    async fn register_user(&self, user: &NewUser) -> Result<User, AppError> {
        user.validate()?;
        info!("Registering user {}", user.username);
        self.http_client
            .create(REGISTER_USER, user, Access::Anonymous)
            .await
    }

    async fn create_user(&self, user: &NewUser) -> Result<User, AppError> {
        user.validate()?;
        info!("Creating user {} as administrator", user.username);
        let created: User = self
            .http_client
            .create(ADMIN_CREATE_USER, user, Access::Authenticated)
            .await?;
        debug!("User created with id {}", created.id);
        Ok(created)
    }
}

#[async_trait]
impl NotificationService for Client {
    async fn list_notifications(
        &self,
        next: Option<&str>,
    ) -> Result<Page<Notification>, AppError> {
        info!("Listing notifications");
        let page: Page<Notification> = self
            .http_client
            .list(&collection_path(NOTIFICATIONS), &[], next, Access::Authenticated)
            .await?;
        debug!("Notifications obtained: {} notifications", page.len());
        Ok(page)
    }

    async fn register_device(&self, device: &NewDevice) -> Result<DeviceRegistration, AppError> {
        device.validate()?;
        info!("Registering device for push notifications");
        let registration: DeviceRegistration = self
            .http_client
            .create(DEVICES, device, Access::Authenticated)
            .await?;
        debug!("Device registration status: {}", registration.status);
        Ok(registration)
    }
}

#[async_trait]
impl BookingService for Client {
    async fn list_bookings(&self, next: Option<&str>) -> Result<Page<Booking>, AppError> {
        info!("Listing bookings");
        let page: Page<Booking> = self
            .http_client
            .list(&collection_path(BOOKINGS), &[], next, Access::Authenticated)
            .await?;
        debug!("Bookings obtained: {} bookings", page.len());
        Ok(page)
    }

    async fn get_booking(&self, id: i64) -> Result<Booking, AppError> {
        info!("Getting booking {}", id);
        self.http_client.retrieve(&detail_path(BOOKINGS, id)).await
    }

    async fn create_booking(&self, booking: &NewBooking) -> Result<Booking, AppError> {
        booking.validate()?;
        info!(
            "Creating booking for {} on property {}",
            booking.guest_name, booking.property
        );
        self.http_client
            .create(&collection_path(BOOKINGS), booking, Access::Authenticated)
            .await
    }

    async fn update_booking(&self, id: i64, update: &BookingUpdate) -> Result<(), AppError> {
        update.validate()?;
        info!("Updating booking {}", id);
        self.http_client.update(&detail_path(BOOKINGS, id), update).await
    }
}

#[async_trait]
impl CleaningTaskService for Client {
    async fn list_cleaning_tasks(&self) -> Result<Page<CleaningTask>, AppError> {
        info!("Listing cleaning tasks");
        let page: Page<CleaningTask> = self
            .http_client
            .list(&collection_path(CLEANING_TASKS), &[], None, Access::Anonymous)
            .await?;
        debug!("Cleaning tasks obtained: {} tasks", page.len());
        Ok(page)
    }

    async fn create_cleaning_task(&self, task: &NewCleaningTask) -> Result<CleaningTask, AppError> {
        task.validate()?;
        info!("Creating cleaning task for {}", task.property_name);
        self.http_client
            .create(&collection_path(CLEANING_TASKS), task, Access::Anonymous)
            .await
    }
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! # AriStay Client Prelude
//!
//! Imports the types and traits needed for most interactions with the API.
//!
//! ```rust
//! use aristay_client::prelude::*;
//!
//! let config = Config::with_base_url("http://127.0.0.1:8000/api");
//! let client = Client::new(config, StoredCredential::new(MemoryStore::new()));
//! assert!(client.is_ok());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

pub use crate::application::config::{Config, RestApiConfig, StorageConfig};
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::AppError;

// ============================================================================
// CLIENT AND SERVICE INTERFACES
// ============================================================================

pub use crate::application::client::Client;
pub use crate::application::interfaces::{
    BookingService, CleaningTaskService, NotificationService, PropertyService, TaskService,
    UserService,
};
pub use crate::model::http::{Access, HttpClient};

// ============================================================================
// CREDENTIAL STORAGE
// ============================================================================

pub use crate::storage::credential::{CredentialProvider, StoredCredential};
pub use crate::storage::store::{FileStore, KeyValueStore, MemoryStore};

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::requests::{
    BookingUpdate, NewBooking, NewCleaningTask, NewDevice, NewProperty, NewTask, NewUser,
    PropertyUpdate, TaskFilter, TaskUpdate, Validate,
};
pub use crate::model::responses::{DeviceRegistration, Page};
pub use crate::presentation::{
    Booking, CleaningTask, Notification, Property, Task, TaskImage, TaskStatus, TaskType, User,
};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::constants::*;
pub use crate::utils::logger::setup_logger;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use chrono::{DateTime, NaiveDate, Utc};
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

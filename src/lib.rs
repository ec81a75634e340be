//! # AriStay Client
//!
//! A Rust client for the AriStay property and task management REST API.
//!
//! The client is a thin, typed pass-through over the backend resources
//! (properties, tasks, task images, users, bookings, notifications and the
//! legacy cleaning tasks endpoint). Every authenticated call reads the
//! `auth_token` credential from an injected local key-value store and sends it as
//! `Authorization: Token <value>`.
//!
//! ## Example
//!
//! ```ignore
//! use aristay_client::prelude::*;
//!
//! let config = Config::new();
//! let store = FileStore::new(&config.storage.path);
//! let client = Client::new(config, StoredCredential::new(store))?;
//!
//! let page = client.list_tasks(None).await?;
//! for task in &page.results {
//!     info!("{} [{}]", task.title, task.status);
//! }
//! ```

/// Application layer: configuration, service interfaces and the client facade
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// Transport and payload models
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Backend resource entities
pub mod presentation;
/// Local credential storage
pub mod storage;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}

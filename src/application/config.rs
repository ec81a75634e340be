/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::{DEFAULT_BASE_URL, DEFAULT_STORAGE_PATH};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Main configuration for the AriStay API client
pub struct Config {
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Local key-value storage configuration
    pub storage: StorageConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the REST API, without trailing slash
    pub base_url: String,
    /// Transport timeout in seconds. `None` leaves requests unbounded
    pub timeout: Option<u64>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, PartialEq)]
/// Configuration for the local preferences file holding the credential
pub struct StorageConfig {
    /// Path of the JSON preferences file
    pub path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the environment
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `ARISTAY_API_BASE_URL` | `http://127.0.0.1:8000/api` |
    /// | `ARISTAY_HTTP_TIMEOUT` | unset or `0` (no timeout) |
    /// | `ARISTAY_STORAGE_PATH` | `.aristay/preferences.json` |
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let base_url = get_env_or_default("ARISTAY_API_BASE_URL", String::from(DEFAULT_BASE_URL));

        Config {
            rest_api: RestApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                // 0 means no timeout
                timeout: get_env_or_none("ARISTAY_HTTP_TIMEOUT").filter(|secs: &u64| *secs > 0),
            },
            storage: StorageConfig {
                path: get_env_or_default(
                    "ARISTAY_STORAGE_PATH",
                    String::from(DEFAULT_STORAGE_PATH),
                ),
            },
        }
    }

    /// Creates a configuration pointing at `base_url`, ignoring the environment
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the REST API, e.g. `https://api.aristay.com/api`
    pub fn with_base_url(base_url: &str) -> Self {
        Config {
            rest_api: RestApiConfig {
                base_url: base_url.trim_end_matches('/').to_string(),
                timeout: None,
            },
            storage: StorageConfig {
                path: String::from(DEFAULT_STORAGE_PATH),
            },
        }
    }

    /// Returns a copy of this configuration with a transport timeout; `0` disables it
    #[must_use]
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.rest_api.timeout = Some(secs).filter(|secs| *secs > 0);
        self
    }
}

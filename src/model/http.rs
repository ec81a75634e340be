/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! HTTP transport for the AriStay API.
//!
//! [`HttpClient`] owns the connection pool, the base URL and the credential
//! provider. Every authenticated call goes through [`HttpClient::authorization`],
//! which reads the token from storage and fails with
//! [`AppError::AuthenticationMissing`] before anything is sent when it is absent.
//!
//! Status handling is exact and per operation: creates accept 200 or 201,
//! updates 200, deletes 204 and uploads 201. There is no retry; every failure
//! is returned once.

use crate::application::config::Config;
use crate::constants::{AUTH_SCHEME, TASK_IMAGE_FIELD, USER_AGENT};
use crate::error::AppError;
use crate::model::responses::Page;
use crate::model::utils::{decode, parse_body};
use crate::storage::credential::CredentialProvider;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, Response, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Statuses accepted from a create call
pub const CREATE_STATUSES: &[StatusCode] = &[StatusCode::OK, StatusCode::CREATED];
/// Statuses accepted from a partial update
pub const UPDATE_STATUSES: &[StatusCode] = &[StatusCode::OK];
/// Statuses accepted from a delete
pub const DELETE_STATUSES: &[StatusCode] = &[StatusCode::NO_CONTENT];
/// Statuses accepted from an attachment upload
pub const UPLOAD_STATUSES: &[StatusCode] = &[StatusCode::CREATED];

/// Whether a call carries the stored credential
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Read the token and send `Authorization: Token <value>`; fail without one
    Authenticated,
    /// Send no credential and never touch storage
    Anonymous,
}

/// Transport shared by every service operation
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
    credentials: Arc<dyn CredentialProvider>,
}

impl HttpClient {
    /// Creates a transport for `config`, reading tokens from `credentials`
    ///
    /// # Errors
    /// [`AppError::Network`] if the underlying reqwest client cannot be built
    pub fn new(config: Arc<Config>, credentials: Arc<dyn CredentialProvider>) -> Result<Self, AppError> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.rest_api.timeout.filter(|secs| *secs > 0) {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build()?;

        Ok(Self {
            http_client,
            config,
            credentials,
        })
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolves `path` against the base URL
    ///
    /// Absolute `http(s)://` URLs, such as a server-provided `next` link, are
    /// returned untouched.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        if is_absolute(path) {
            path.to_string()
        } else {
            let path = path.trim_start_matches('/');
            format!("{}/{}", self.config.rest_api.base_url.trim_end_matches('/'), path)
        }
    }

    /// Whether `url` has the same scheme, host and port as the base URL
    #[must_use]
    pub fn is_api_origin(&self, url: &str) -> bool {
        match (Url::parse(url), Url::parse(&self.config.rest_api.base_url)) {
            (Ok(link), Ok(base)) => link.origin() == base.origin(),
            _ => false,
        }
    }

    /// Builds the `Authorization` header value from the stored token
    ///
    /// # Errors
    /// [`AppError::AuthenticationMissing`] when no non-empty token is stored
    pub async fn authorization(&self) -> Result<String, AppError> {
        match self.credentials.token().await? {
            Some(token) if !token.trim().is_empty() => Ok(format!("{AUTH_SCHEME} {}", token.trim())),
            _ => {
                debug!("No credential in local storage, refusing to send request");
                Err(AppError::AuthenticationMissing)
            }
        }
    }

    /// Sends a request and returns the raw response, whatever its status
    pub async fn send<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&B>,
        access: Access,
    ) -> Result<Response, AppError> {
        let authorization = match access {
            Access::Authenticated => Some(self.authorization().await?),
            Access::Anonymous => None,
        };
        let url = self.url(path);

        let mut headers = vec![("Accept", "application/json")];
        if let Some(value) = authorization.as_deref() {
            headers.push(("Authorization", value));
        }

        make_http_request(&self.http_client, method, &url, headers, query, body).await
    }

    /// Fetches one page of a collection
    ///
    /// `next` replaces `path` and `query` when present. An absolute `next`
    /// on another origin is refused for authenticated calls so the token
    /// never leaves the API host.
    pub async fn list<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        next: Option<&str>,
        access: Access,
    ) -> Result<Page<T>, AppError> {
        let response = match next {
            Some(url) => {
                if access == Access::Authenticated && is_absolute(url) && !self.is_api_origin(url) {
                    warn!("Refusing to follow next link outside the API origin: {}", url);
                    return Err(AppError::InvalidInput(format!(
                        "next link {url} is outside the API origin"
                    )));
                }
                self.send(Method::GET, url, &[], None::<&()>, access).await?
            }
            None => self.send(Method::GET, path, query, None::<&()>, access).await?,
        };
        let response = expect_success(response).await?;
        let page = Page::from_value(read_json(response).await?)?;
        debug!("Decoded page with {} item(s), next: {:?}", page.len(), page.next);
        Ok(page)
    }

    /// Fetches a single resource. A 404 becomes [`AppError::NotFound`]
    pub async fn retrieve<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self
            .send(Method::GET, path, &[], None::<&()>, Access::Authenticated)
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!("{} not found", path);
            return Err(AppError::NotFound);
        }
        let response = expect_success(response).await?;
        decode(read_json(response).await?)
    }

    /// Posts `body` and decodes the created resource
    pub async fn create<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        access: Access,
    ) -> Result<T, AppError> {
        let response = self.send(Method::POST, path, &[], Some(body), access).await?;
        let response = expect_status(response, CREATE_STATUSES).await?;
        decode(read_json(response).await?)
    }

    /// Sends a partial update. Succeeds on 200 only; the body is not decoded
    pub async fn update<B: Serialize>(&self, path: &str, body: &B) -> Result<(), AppError> {
        let response = self
            .send(Method::PATCH, path, &[], Some(body), Access::Authenticated)
            .await?;
        expect_status(response, UPDATE_STATUSES).await?;
        Ok(())
    }

    /// Deletes a resource. Succeeds on 204 only
    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        let response = self
            .send(Method::DELETE, path, &[], None::<&()>, Access::Authenticated)
            .await?;
        expect_status(response, DELETE_STATUSES).await?;
        Ok(())
    }

    /// Uploads one file as the single multipart field `image`. Succeeds on 201 only
    pub async fn upload(&self, path: &str, file_name: &str, bytes: Vec<u8>) -> Result<(), AppError> {
        let authorization = self.authorization().await?;
        let url = self.url(path);

        let size = bytes.len();
        let mime_type = mime_guess::from_path(file_name).first_or_octet_stream();
        let part = Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime_type.as_ref())?;
        let form = Form::new().part(TASK_IMAGE_FIELD, part);

        debug!("POST {} (multipart, {}, {} byte(s))", url, mime_type, size);
        let response = self
            .http_client
            .post(&url)
            .header("Accept", "application/json")
            .header("Authorization", authorization)
            .multipart(form)
            .send()
            .await?;
        debug!("Response status: {}", response.status());

        expect_status(response, UPLOAD_STATUSES).await?;
        Ok(())
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Makes a single HTTP request
///
/// Headers are applied in order, `query` is appended to the URL and `body`,
/// when present, is sent as JSON. No status interpretation happens here.
///
/// # Example
///
/// ```ignore
/// use aristay_client::model::http::make_http_request;
/// use reqwest::{Client, Method};
///
/// let client = Client::new();
/// let headers = vec![("Authorization", "Token abc123")];
/// let response = make_http_request(
///     &client,
///     Method::GET,
///     "http://127.0.0.1:8000/api/tasks/",
///     headers,
///     &[("status", "completed".to_string())],
///     None::<&()>,
/// )
/// .await?;
/// ```
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    query: &[(&str, String)],
    body: Option<&B>,
) -> Result<Response, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if !query.is_empty() {
        request = request.query(query);
    }

    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    debug!("Response status: {}", response.status());
    Ok(response)
}

/// Passes the response through when its status is one of `accepted`
pub async fn expect_status(response: Response, accepted: &[StatusCode]) -> Result<Response, AppError> {
    let status = response.status();
    if accepted.contains(&status) {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    error!("Request failed with status {}: {}", status, body);
    Err(AppError::Unexpected(status))
}

/// Passes the response through when its status is any 2xx
pub async fn expect_success(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    error!("Request failed with status {}: {}", status, body);
    Err(AppError::Unexpected(status))
}

/// Reads the whole body and parses it as JSON
pub async fn read_json(response: Response) -> Result<Value, AppError> {
    let bytes = response.bytes().await?;
    parse_body(&bytes)
}

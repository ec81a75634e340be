/// Key under which the bearer credential is persisted in local storage
pub const AUTH_TOKEN_KEY: &str = "auth_token";
/// Scheme prefix of the `Authorization` header value
pub const AUTH_SCHEME: &str = "Token";
/// Default base URL of the REST API
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";
/// Default location of the local preferences file
pub const DEFAULT_STORAGE_PATH: &str = ".aristay/preferences.json";
/// User agent string used in HTTP requests to identify this client to the backend
pub const USER_AGENT: &str = concat!("aristay-client/", env!("CARGO_PKG_VERSION"));
/// Multipart field name carrying an uploaded task image
pub const TASK_IMAGE_FIELD: &str = "image";

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decodes a JSON value into `T`
///
/// Any mismatch (missing required field, wrong type) is reported as
/// [`AppError::UnexpectedPayloadShape`]; unknown fields are ignored.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| AppError::UnexpectedPayloadShape(e.to_string()))
}

/// Parses a raw response body as JSON
pub fn parse_body(bytes: &[u8]) -> Result<Value, AppError> {
    serde_json::from_slice(bytes)
        .map_err(|e| AppError::UnexpectedPayloadShape(format!("body is not valid JSON: {e}")))
}

/// Path of a single resource, e.g. `tasks/42/`
#[must_use]
pub fn detail_path(collection: &str, id: i64) -> String {
    format!("{}/{id}/", collection.trim_matches('/'))
}

/// Path of a collection, e.g. `tasks/`
#[must_use]
pub fn collection_path(collection: &str) -> String {
    format!("{}/", collection.trim_matches('/'))
}

/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::error::AppError;
use crate::model::utils::decode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One page of a list response
///
/// The backend answers list calls either with a bare JSON array or with an
/// object carrying a `results` array and a `next` URL. Both decode into a
/// `Page`; `next` is kept verbatim so the caller can request the following
/// page with it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    /// Items of this page, in server order
    pub results: Vec<T>,
    /// Full URL of the next page, if any
    pub next: Option<String>,
    /// Total number of items across pages, when reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl<T> Page<T> {
    /// Whether the server reported a further page
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Number of items on this page
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Whether this page holds no items
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Decodes a list response body
    ///
    /// # Errors
    /// [`AppError::UnexpectedPayloadShape`] when the body is neither an array
    /// nor an object with a `results` array, or when an item does not decode.
    pub fn from_value(value: Value) -> Result<Self, AppError> {
        match value {
            Value::Array(items) => Ok(Page {
                results: decode_items(items)?,
                next: None,
                count: None,
            }),
            Value::Object(mut map) => {
                let items = match map.remove("results") {
                    Some(Value::Array(items)) => items,
                    Some(other) => {
                        return Err(AppError::UnexpectedPayloadShape(format!(
                            "`results` is not an array: {other}"
                        )));
                    }
                    None => {
                        return Err(AppError::UnexpectedPayloadShape(
                            "object without `results` field".to_string(),
                        ));
                    }
                };
                let next = match map.remove("next") {
                    None | Some(Value::Null) => None,
                    Some(Value::String(url)) => Some(url),
                    Some(other) => {
                        return Err(AppError::UnexpectedPayloadShape(format!(
                            "`next` is not a string: {other}"
                        )));
                    }
                };
                let count = map.get("count").and_then(Value::as_u64);
                Ok(Page {
                    results: decode_items(items)?,
                    next,
                    count,
                })
            }
            other => Err(AppError::UnexpectedPayloadShape(format!(
                "expected an array or a paginated object, got {other}"
            ))),
        }
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.into_iter()
    }
}

/// Acknowledgement of a device registration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeviceRegistration {
    /// `registered` on success
    pub status: String,
}

impl DeviceRegistration {
    /// Whether the server confirmed the registration
    #[must_use]
    pub fn is_registered(&self) -> bool {
        self.status == "registered"
    }
}

fn decode_items<T: DeserializeOwned>(items: Vec<Value>) -> Result<Vec<T>, AppError> {
    items.into_iter().map(decode).collect()
}

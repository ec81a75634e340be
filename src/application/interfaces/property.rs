use crate::error::AppError;
use crate::model::requests::{NewProperty, PropertyUpdate};
use crate::model::responses::Page;
use crate::presentation::property::Property;
use async_trait::async_trait;

/// Interface for the property service
#[async_trait]
pub trait PropertyService: Send + Sync {
    /// Lists properties
    ///
    /// # Arguments
    /// * `next` - `next` URL of a previous page, or `None` for the first page
    async fn list_properties(&self, next: Option<&str>) -> Result<Page<Property>, AppError>;

    /// Gets a single property
    async fn get_property(&self, id: i64) -> Result<Property, AppError>;

    /// Creates a property. Accepts 200 or 201
    async fn create_property(&self, property: &NewProperty) -> Result<Property, AppError>;

    /// Partially updates a property. Succeeds on 200 only
    async fn update_property(&self, id: i64, update: &PropertyUpdate) -> Result<(), AppError>;

    /// Deletes a property. Succeeds on 204 only
    async fn delete_property(&self, id: i64) -> Result<(), AppError>;
}

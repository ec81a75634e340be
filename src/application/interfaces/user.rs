use crate::error::AppError;
use crate::model::requests::NewUser;
use crate::model::responses::Page;
use crate::presentation::user::User;
use async_trait::async_trait;

/// Interface for the user service
#[async_trait]
pub trait UserService: Send + Sync {
    /// Lists users
    ///
    /// # Arguments
    /// * `next` - `next` URL of a previous page, or `None` for the first page
    async fn list_users(&self, next: Option<&str>) -> Result<Page<User>, AppError>;

    /// Gets the user the stored token belongs to
    async fn current_user(&self) -> Result<User, AppError>;

    /// Self-registration. Sent without a credential; accepts 200 or 201
    async fn register_user(&self, user: &NewUser) -> Result<User, AppError>;

    /// Creates an account as an administrator. Accepts 200 or 201
    async fn create_user(&self, user: &NewUser) -> Result<User, AppError>;
}

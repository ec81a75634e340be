use crate::error::AppError;
use crate::model::requests::{NewTask, TaskFilter, TaskUpdate};
use crate::model::responses::Page;
use crate::presentation::task::Task;
use async_trait::async_trait;
use std::path::Path;

/// Interface for the task service
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Lists tasks
    ///
    /// # Arguments
    /// * `next` - `next` URL of a previous page, or `None` for the first page
    ///
    /// # Returns
    /// * One page of tasks; follow `next` to get the rest
    async fn list_tasks(&self, next: Option<&str>) -> Result<Page<Task>, AppError>;

    /// Lists the first page of tasks matching `filter`
    async fn list_tasks_filtered(&self, filter: &TaskFilter) -> Result<Page<Task>, AppError>;

    /// Gets a single task. A 404 is reported as [`AppError::NotFound`]
    async fn get_task(&self, id: i64) -> Result<Task, AppError>;

    /// Creates a task. Accepts 200 or 201
    async fn create_task(&self, task: &NewTask) -> Result<Task, AppError>;

    /// Partially updates a task. Succeeds on 200 only
    async fn update_task(&self, id: i64, update: &TaskUpdate) -> Result<(), AppError>;

    /// Deletes a task. Succeeds on 204 only
    async fn delete_task(&self, id: i64) -> Result<(), AppError>;

    /// Attaches an image to a task. Succeeds on 201 only
    ///
    /// # Arguments
    /// * `task_id` - Task receiving the image
    /// * `file_name` - Name reported in the multipart part
    /// * `bytes` - File contents
    async fn upload_task_image(
        &self,
        task_id: i64,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> Result<(), AppError>;

    /// Reads a file from disk and attaches it to a task
    async fn upload_task_image_from_path(&self, task_id: i64, path: &Path) -> Result<(), AppError>;
}

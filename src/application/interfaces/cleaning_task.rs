use crate::error::AppError;
use crate::model::requests::NewCleaningTask;
use crate::model::responses::Page;
use crate::presentation::cleaning_task::CleaningTask;
use async_trait::async_trait;

/// Interface for the simplified `/cleaning-tasks/` endpoint
///
/// This endpoint is unauthenticated: no credential is read or sent.
#[async_trait]
pub trait CleaningTaskService: Send + Sync {
    /// Lists cleaning tasks
    async fn list_cleaning_tasks(&self) -> Result<Page<CleaningTask>, AppError>;

    /// Creates a cleaning task. Accepts 200 or 201
    async fn create_cleaning_task(&self, task: &NewCleaningTask) -> Result<CleaningTask, AppError>;
}

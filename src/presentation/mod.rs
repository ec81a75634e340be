/// Reservation models
pub mod booking;
/// Legacy cleaning task models
pub mod cleaning_task;
/// Notification models
pub mod notification;
/// Property models
pub mod property;
/// Task, task status and task type models
pub mod task;
/// Task image models
pub mod task_image;
/// User models
pub mod user;

pub use booking::*;
pub use cleaning_task::*;
pub use notification::*;
pub use property::*;
pub use task::*;
pub use task_image::*;
pub use user::*;

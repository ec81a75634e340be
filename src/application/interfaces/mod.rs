/// Booking service interface
pub mod booking;
/// Legacy cleaning task service interface
pub mod cleaning_task;
/// Notification service interface
pub mod notification;
/// Property service interface
pub mod property;
/// Task and task image service interface
pub mod task;
/// User service interface
pub mod user;

pub use booking::*;
pub use cleaning_task::*;
pub use notification::*;
pub use property::*;
pub use task::*;
pub use user::*;

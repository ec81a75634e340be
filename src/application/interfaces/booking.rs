use crate::error::AppError;
use crate::model::requests::{BookingUpdate, NewBooking};
use crate::model::responses::Page;
use crate::presentation::booking::Booking;
use async_trait::async_trait;

/// Interface for the booking service
#[async_trait]
pub trait BookingService: Send + Sync {
    /// Lists bookings
    async fn list_bookings(&self, next: Option<&str>) -> Result<Page<Booking>, AppError>;

    /// Gets a single booking
    async fn get_booking(&self, id: i64) -> Result<Booking, AppError>;

    /// Creates a booking. Accepts 200 or 201
    async fn create_booking(&self, booking: &NewBooking) -> Result<Booking, AppError>;

    /// Partially updates a booking. Succeeds on 200 only
    async fn update_booking(&self, id: i64, update: &BookingUpdate) -> Result<(), AppError>;
}

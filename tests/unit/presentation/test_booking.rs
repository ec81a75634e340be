use aristay_client::model::utils::decode;
use aristay_client::presentation::{Booking, CleaningTask};
use serde_json::json;

#[test]
fn test_booking_defaults_and_nights() {
    let booking: Booking = decode(json!({
        "id": 4,
        "property": 1,
        "check_in_date": "2026-07-01",
        "check_out_date": "2026-07-04",
        "guest_name": "Test Guest"
    }))
    .unwrap();
    assert_eq!(booking.status, "confirmed");
    assert_eq!(booking.guest_contact, None);
    assert_eq!(booking.nights(), 3);
}

#[test]
fn test_booking_bad_date_fails() {
    let result = decode::<Booking>(json!({
        "id": 4,
        "property": 1,
        "check_in_date": "01/07/2026",
        "check_out_date": "2026-07-04",
        "guest_name": "Test Guest"
    }));
    assert!(result.is_err());
}

#[test]
fn test_cleaning_task_default_status() {
    let task: CleaningTask = decode(json!({
        "id": 1, "property_name": "Villa Azul", "created_at": "2026-10-15T08:30:00.123456Z"
    }))
    .unwrap();
    assert_eq!(task.status, "pending");
    assert!(task.created_at.is_some());
}

use aristay_client::model::utils::decode;
use aristay_client::presentation::{Booking, Property, Task, TaskImage, User};
use assert_json_diff::assert_json_eq;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

fn assert_round_trip<T: Serialize + DeserializeOwned>(payload: Value) {
    let entity: T = decode(payload.clone()).unwrap();
    assert_json_eq!(serde_json::to_value(&entity).unwrap(), payload);
}

#[test]
fn test_user_round_trip() {
    assert_round_trip::<User>(json!({
        "id": 1,
        "username": "admin",
        "email": "admin@aristay.com",
        "is_staff": true,
        "is_superuser": true
    }));
}

#[test]
fn test_property_round_trip() {
    assert_round_trip::<Property>(json!({
        "id": 2,
        "name": "Beach House",
        "address": "1 Ocean Dr",
        "created_at": "2026-10-15T08:30:00Z"
    }));
}

#[test]
fn test_task_round_trip() {
    assert_round_trip::<Task>(json!({
        "id": 42,
        "property": 3,
        "title": "Fix sink",
        "description": "Kitchen sink leaks",
        "task_type": "maintenance",
        "status": "open",
        "assigned_to": 5,
        "images": [{"id": 1, "image": "http://127.0.0.1:8000/media/sink.jpg", "task": 42}]
    }));
}

#[test]
fn test_task_image_round_trip() {
    assert_round_trip::<TaskImage>(json!({
        "id": 1,
        "image": "http://127.0.0.1:8000/media/sink.jpg",
        "uploaded_at": "2026-10-15T08:30:00Z"
    }));
}

#[test]
fn test_booking_round_trip() {
    assert_round_trip::<Booking>(json!({
        "id": 4,
        "property": 1,
        "check_in_date": "2026-07-01",
        "check_out_date": "2026-07-04",
        "guest_name": "Test Guest",
        "guest_contact": "test@guest.com",
        "status": "confirmed"
    }));
}

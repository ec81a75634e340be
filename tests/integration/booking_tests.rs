use crate::common::{self, AUTH_HEADER};
use aristay_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn test_create_booking() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/bookings/")
        .match_header("authorization", AUTH_HEADER)
        .match_body(Matcher::Json(json!({
            "property": 1,
            "check_in_date": "2026-07-01",
            "check_out_date": "2026-07-03",
            "guest_name": "Test Guest",
            "guest_contact": "test@guest.com"
        })))
        .with_status(201)
        .with_body(
            r#"{"id": 4, "property": 1, "check_in_date": "2026-07-01",
                "check_out_date": "2026-07-03", "guest_name": "Test Guest",
                "guest_contact": "test@guest.com", "status": "confirmed"}"#,
        )
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let booking = client
        .create_booking(
            &NewBooking::new(1, date(2026, 7, 1), date(2026, 7, 3), "Test Guest")
                .with_guest_contact("test@guest.com"),
        )
        .await
        .unwrap();
    assert_eq!(booking.id, 4);
    assert_eq!(booking.nights(), 2);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_list_and_get_booking() {
    let mut server = Server::new_async().await;
    let body = r#"{"id": 4, "property": 1, "check_in_date": "2026-07-01",
                   "check_out_date": "2026-07-03", "guest_name": "Test Guest"}"#;
    let _list = server
        .mock("GET", "/bookings/")
        .with_status(200)
        .with_body(format!(r#"{{"next": null, "results": [{body}]}}"#))
        .create_async()
        .await;
    let _detail = server
        .mock("GET", "/bookings/4/")
        .with_status(200)
        .with_body(body)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let page = client.list_bookings(None).await.unwrap();
    assert_eq!(page.len(), 1);
    let booking = client.get_booking(4).await.unwrap();
    assert_eq!(booking, page.results[0]);
}

#[tokio::test]
async fn test_update_booking() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/bookings/4/")
        .match_body(Matcher::Json(json!({"guest_name": "Updated Guest"})))
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    client
        .update_booking(4, &BookingUpdate::new().with_guest_name("Updated Guest"))
        .await
        .unwrap();
    mock.assert_async().await;
}

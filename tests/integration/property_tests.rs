use crate::common::{self, AUTH_HEADER};
use aristay_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_list_properties_bare_array() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/properties/")
        .match_header("authorization", AUTH_HEADER)
        .with_status(200)
        .with_body(r#"[{"id": 1, "name": "Test Property 1"}, {"id": 2, "name": "Test Property 2"}]"#)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let page = client.list_properties(None).await.unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page.next, None);
    assert_eq!(page.results[1].name, "Test Property 2");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_property() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/properties/1/")
        .with_status(200)
        .with_body(r#"{"id": 1, "name": "Test Property 1", "address": "1 Ocean Dr"}"#)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let property = client.get_property(1).await.unwrap();
    assert_eq!(property.address.as_deref(), Some("1 Ocean Dr"));
}

#[tokio::test]
async fn test_create_property() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/properties/")
        .match_header("authorization", AUTH_HEADER)
        .match_body(Matcher::Json(json!({"name": "New Property"})))
        .with_status(201)
        .with_body(r#"{"id": 3, "name": "New Property"}"#)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let property = client
        .create_property(&NewProperty::new("New Property"))
        .await
        .unwrap();
    assert_eq!(property.id, 3);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_create_property_forbidden() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", "/properties/")
        .with_status(403)
        .with_body(r#"{"detail": "You do not have permission to perform this action."}"#)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let err = client
        .create_property(&NewProperty::new("New Property"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Unexpected(s) if s.as_u16() == 403));
}

#[tokio::test]
async fn test_update_property() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PATCH", "/properties/1/")
        .match_body(Matcher::Json(json!({"name": "Renamed"})))
        .with_status(200)
        .with_body(r#"{"id": 1, "name": "Renamed"}"#)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    client
        .update_property(1, &PropertyUpdate::new().with_name("Renamed"))
        .await
        .unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_property() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("DELETE", "/properties/1/")
        .match_header("authorization", AUTH_HEADER)
        .with_status(204)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    client.delete_property(1).await.unwrap();
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delete_property_not_found_is_unexpected() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("DELETE", "/properties/9/")
        .with_status(404)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let err = client.delete_property(9).await.unwrap_err();
    assert!(matches!(err, AppError::Unexpected(s) if s.as_u16() == 404));
}

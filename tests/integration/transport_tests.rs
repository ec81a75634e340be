use crate::common::{self, AUTH_HEADER};
use aristay_client::prelude::*;
use mockito::{Matcher, Server};

#[tokio::test]
async fn test_connection_failure_is_network_error() {
    // nothing listens on port 1
    let client = Client::new(
        Config::with_base_url("http://127.0.0.1:1/api"),
        StoredCredential::new(MemoryStore::with_entries([(AUTH_TOKEN_KEY, common::TOKEN)])),
    )
    .unwrap();

    let err = client.list_tasks(None).await.unwrap_err();
    assert!(matches!(err, AppError::Network(_)));
}

#[tokio::test]
async fn test_token_is_read_on_every_call() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/tasks/")
        .match_header("authorization", AUTH_HEADER)
        .with_status(200)
        .with_body("[]")
        .expect(1)
        .create_async()
        .await;

    let store = Arc::new(MemoryStore::with_entries([(AUTH_TOKEN_KEY, common::TOKEN)]));
    let client = Client::new(
        Config::with_base_url(&server.url()),
        StoredCredential::from_shared(store.clone()),
    )
    .unwrap();

    client.list_tasks(None).await.unwrap();

    // logout performed by the host application
    store.remove(AUTH_TOKEN_KEY).await.unwrap();
    let err = client.list_tasks(None).await.unwrap_err();
    assert!(matches!(err, AppError::AuthenticationMissing));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_non_json_body_is_shape_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/properties/")
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body("<html><body>Maintenance</body></html>")
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let err = client.list_properties(None).await.unwrap_err();
    assert!(matches!(err, AppError::UnexpectedPayloadShape(_)));
}

#[tokio::test]
async fn test_concurrent_calls_are_independent() {
    let mut server = Server::new_async().await;
    let tasks = server
        .mock("GET", "/tasks/")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    let users = server
        .mock("GET", "/users/")
        .with_status(500)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let (tasks_result, users_result) = tokio::join!(client.list_tasks(None), client.list_users(None));
    assert!(tasks_result.unwrap().is_empty());
    assert!(matches!(users_result, Err(AppError::Unexpected(_))));

    tasks.assert_async().await;
    users.assert_async().await;
}

#[test]
fn test_client_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
}

#[tokio::test]
async fn test_zero_timeout_does_not_fail_requests() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/tasks/")
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;

    let mut config = Config::with_base_url(&server.url());
    config.rest_api.timeout = Some(0);
    let client = Client::new(
        config,
        StoredCredential::new(MemoryStore::with_entries([(AUTH_TOKEN_KEY, common::TOKEN)])),
    )
    .unwrap();

    assert!(client.list_tasks(None).await.unwrap().is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_next_link_on_other_origin_is_refused() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = common::create_test_client(&server);
    let err = client
        .list_tasks(Some("http://127.0.0.1:1/api/tasks/?page=2"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
    mock.assert_async().await;
}

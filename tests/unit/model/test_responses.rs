use aristay_client::error::AppError;
use aristay_client::model::responses::Page;
use aristay_client::presentation::{Task, User};
use serde_json::json;

#[test]
fn test_page_from_bare_array() {
    let value = json!([
        {"id": 1, "username": "alice"},
        {"id": 2, "username": "bob", "is_staff": true}
    ]);
    let page: Page<User> = Page::from_value(value).unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page.next, None);
    assert!(!page.has_next());
    assert!(page.results[1].is_staff);
}

#[test]
fn test_page_from_paginated_object() {
    let value = json!({
        "count": 3,
        "next": "http://127.0.0.1:8000/api/users/?page=2",
        "previous": null,
        "results": [{"id": 1, "username": "alice"}]
    });
    let page: Page<User> = Page::from_value(value).unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page.count, Some(3));
    assert_eq!(
        page.next.as_deref(),
        Some("http://127.0.0.1:8000/api/users/?page=2")
    );
}

#[test]
fn test_page_with_empty_results_is_not_an_error() {
    let value = json!({"count": 0, "next": null, "previous": null, "results": []});
    let page: Page<Task> = Page::from_value(value).unwrap();
    assert!(page.is_empty());
    assert!(!page.has_next());
}

#[test]
fn test_page_rejects_object_without_results() {
    let value = json!({"detail": "Invalid page."});
    let err = Page::<Task>::from_value(value).unwrap_err();
    assert!(matches!(err, AppError::UnexpectedPayloadShape(_)));
}

#[test]
fn test_page_rejects_scalar_body() {
    let err = Page::<Task>::from_value(json!("ok")).unwrap_err();
    assert!(matches!(err, AppError::UnexpectedPayloadShape(_)));
}

#[test]
fn test_page_rejects_non_string_next() {
    let value = json!({"next": 2, "results": []});
    let err = Page::<Task>::from_value(value).unwrap_err();
    assert!(matches!(err, AppError::UnexpectedPayloadShape(_)));
}

#[test]
fn test_page_rejects_malformed_item() {
    let value = json!({"next": null, "results": [{"id": 1, "username": "alice"}, {"id": 2}]});
    let err = Page::<User>::from_value(value).unwrap_err();
    match err {
        AppError::UnexpectedPayloadShape(msg) => assert!(msg.contains("username")),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[test]
fn test_page_into_iter_keeps_order() {
    let value = json!([{"id": 3, "username": "c"}, {"id": 1, "username": "a"}]);
    let page: Page<User> = Page::from_value(value).unwrap();
    let ids: Vec<i64> = page.into_iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![3, 1]);
}

use aristay_client::error::AppError;
use reqwest::StatusCode;
use std::error::Error;

#[test]
fn test_app_error_display_authentication_missing() {
    let error = AppError::AuthenticationMissing;
    assert_eq!(error.to_string(), "authentication missing");
}

#[test]
fn test_app_error_display_not_found() {
    let error = AppError::NotFound;
    assert_eq!(error.to_string(), "not found");
}

#[test]
fn test_app_error_display_unexpected() {
    let error = AppError::Unexpected(StatusCode::BAD_REQUEST);
    assert!(error.to_string().contains("400"));
}

#[test]
fn test_app_error_display_payload_shape() {
    let error = AppError::UnexpectedPayloadShape("missing field `id`".to_string());
    assert_eq!(
        error.to_string(),
        "unexpected payload shape: missing field `id`"
    );
}

#[test]
fn test_app_error_display_invalid_input() {
    let error = AppError::InvalidInput("title must not be empty".to_string());
    assert_eq!(error.to_string(), "invalid input: title must not be empty");
}

#[test]
fn test_app_error_display_storage() {
    let error = AppError::Storage("prefs.json: trailing characters".to_string());
    assert_eq!(error.to_string(), "storage error: prefs.json: trailing characters");
}

#[test]
fn test_app_error_status() {
    assert_eq!(
        AppError::Unexpected(StatusCode::FORBIDDEN).status(),
        Some(StatusCode::FORBIDDEN)
    );
    assert_eq!(AppError::NotFound.status(), Some(StatusCode::NOT_FOUND));
    assert_eq!(AppError::AuthenticationMissing.status(), None);
}

// reqwest::Error cannot be constructed directly; the Network conversion is
// exercised by the integration tests against an unreachable server

#[test]
fn test_app_error_from_serde() {
    let json = r#"{"invalid": json}"#;
    let serde_error = serde_json::from_str::<serde_json::Value>(json).unwrap_err();
    let app_error: AppError = serde_error.into();

    match app_error {
        AppError::Json(_) => (),
        _ => panic!("Expected Json error"),
    }
}

#[test]
fn test_app_error_from_io() {
    let io_error = std::io::Error::other("test");
    let app_error: AppError = io_error.into();

    match app_error {
        AppError::Io(ref e) => assert_eq!(e.to_string(), "test"),
        _ => panic!("Expected Io error"),
    }
    assert!(app_error.source().is_some());
}

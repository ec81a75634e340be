use aristay_client::model::utils::decode;
use aristay_client::presentation::Property;
use serde_json::json;

#[test]
fn test_property_minimal() {
    let property: Property = decode(json!({"id": 1, "name": "Test Property 1"})).unwrap();
    assert_eq!(property.name, "Test Property 1");
    assert_eq!(property.address, None);
    assert_eq!(property.created_at, None);
}

#[test]
fn test_property_missing_name_fails() {
    assert!(decode::<Property>(json!({"id": 1})).is_err());
}

#[test]
fn test_property_display_contains_fields() {
    let property: Property = decode(json!({"id": 1, "name": "Beach House"})).unwrap();
    let shown = property.to_string();
    assert!(shown.contains("Beach House"));
    assert!(!shown.contains("address"));
}

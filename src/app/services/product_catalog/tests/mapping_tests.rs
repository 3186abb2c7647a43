//! Tests for catalog mapping construction and payload deserialization

use super::api_product;
use crate::app::services::product_catalog::client::ApiProduct;
use crate::app::services::product_catalog::build_product_mapping;

#[test]
fn test_mapping_indexes_by_id() {
    let mapping = build_product_mapping(vec![api_product(1), api_product(2)]);

    assert_eq!(mapping.len(), 2);
    assert_eq!(mapping[&1].category.as_deref(), Some("smartphones"));
    assert_eq!(mapping[&2].rating, Some(4.69));
}

#[test]
fn test_mapping_skips_entries_without_id() {
    let mut anonymous = api_product(0);
    anonymous.id = None;

    let mapping = build_product_mapping(vec![anonymous, api_product(7)]);
    assert_eq!(mapping.len(), 1);
    assert!(mapping.contains_key(&7));
}

#[test]
fn test_mapping_empty_catalog() {
    assert!(build_product_mapping(Vec::new()).is_empty());
}

#[test]
fn test_api_product_tolerates_missing_fields() {
    // dummyjson omits `brand` for some categories; everything except the
    // object itself is optional
    let product: ApiProduct =
        serde_json::from_str(r#"{"id": 11, "title": "perfume Oil", "rating": 4.26}"#).unwrap();

    assert_eq!(product.id, Some(11));
    assert_eq!(product.title.as_deref(), Some("perfume Oil"));
    assert_eq!(product.brand, None);
    assert_eq!(product.category, None);
    assert_eq!(product.rating, Some(4.26));
}

#[test]
fn test_api_product_extra_fields_are_ignored() {
    let product: ApiProduct = serde_json::from_str(
        r#"{"id": 1, "title": "iPhone 9", "price": 549, "stock": 94, "category": "smartphones"}"#,
    )
    .unwrap();

    assert_eq!(product.id, Some(1));
    assert_eq!(product.category.as_deref(), Some("smartphones"));
}

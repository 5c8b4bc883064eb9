use std::io::Write;

use itemdeck_catalog::{Catalog, CatalogError};
use itemdeck_model::Status;

const SMALL_CATALOG: &str = r#"
categories = ["A", "B"]
statuses = ["active", "inactive"]

[[items]]
id = "1"
name = "Apple"
category = "A"
value = 100
status = "active"
createdAt = "2024-01-01T00:00:00Z"
"#;

#[test]
fn loads_catalog_from_disk() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(SMALL_CATALOG.as_bytes()).expect("write catalog");

    let catalog = Catalog::load(file.path()).expect("load catalog");
    assert_eq!(catalog.categories().len(), 2);
    assert_eq!(catalog.items().len(), 1);
    assert_eq!(catalog.items()[0].value, 100.0);
    assert_eq!(catalog.items()[0].description, None);
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("nope.toml");
    let err = Catalog::load(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn rejects_duplicate_seed_ids() {
    let content = format!(
        "{SMALL_CATALOG}\n[[items]]\nid = \"1\"\nname = \"Again\"\ncategory = \"B\"\nvalue = 1\nstatus = \"inactive\"\ncreatedAt = \"2024-01-02T00:00:00Z\"\n"
    );
    let err = Catalog::from_toml_str(&content, "test").unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateId { ref id } if id == "1"));
}

#[test]
fn rejects_seed_item_outside_enumeration() {
    let content = SMALL_CATALOG.replace("category = \"A\"", "category = \"Z\"");
    let err = Catalog::from_toml_str(&content, "test").unwrap_err();
    assert!(matches!(err, CatalogError::UnknownCategory { .. }));

    let content = SMALL_CATALOG.replace("statuses = [\"active\", \"inactive\"]", "statuses = [\"inactive\"]");
    let err = Catalog::from_toml_str(&content, "test").unwrap_err();
    assert!(matches!(err, CatalogError::UnknownStatus { .. }));
}

#[test]
fn rejects_empty_enumerations() {
    let err = Catalog::from_toml_str("categories = []\nstatuses = [\"active\"]", "test").unwrap_err();
    assert!(matches!(err, CatalogError::NoCategories));

    let err = Catalog::from_toml_str("categories = [\"A\"]\nstatuses = []", "test").unwrap_err();
    assert!(matches!(err, CatalogError::NoStatuses));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = Catalog::from_toml_str("categories = [", "broken.toml").unwrap_err();
    assert!(matches!(err, CatalogError::Toml { .. }));
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn builtin_seed_statuses_are_known() {
    let catalog = Catalog::builtin();
    assert!(catalog.items().iter().all(|i| catalog.contains_status(i.status)));
    assert_eq!(
        catalog.items().iter().filter(|i| i.status == Status::Inactive).count(),
        1
    );
}

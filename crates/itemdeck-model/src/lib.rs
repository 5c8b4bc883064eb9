#![deny(unsafe_code)]

pub mod enums;
pub mod error;
pub mod filters;
pub mod ids;
pub mod record;

pub use enums::{SortDirection, SortField, Status};
pub use error::{ModelError, Result};
pub use filters::{FilterConfig, SortConfig};
pub use ids::{Category, ItemId};
pub use record::Record;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let record = Record {
            id: ItemId::new("1").unwrap(),
            name: "Office Supplies".to_string(),
            category: Category::new("Supplies").unwrap(),
            value: 350.0,
            status: Status::Active,
            created_at: "2024-02-10T09:15:00Z".parse().unwrap(),
            description: None,
        };
        let json = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(json["createdAt"], "2024-02-10T09:15:00.000Z");
        assert_eq!(json["status"], "active");
        assert!(json.get("description").is_none());
    }

    #[test]
    fn created_at_keeps_millisecond_precision() {
        let json = r#"{"id":"7","name":"Laptop","category":"IT","value":1200,
            "status":"inactive","createdAt":"2024-01-15T08:00:00.250Z"}"#;
        let record: Record = serde_json::from_str(json).expect("parse record");
        let back = serde_json::to_value(&record).expect("serialize record");
        assert_eq!(back["createdAt"], "2024-01-15T08:00:00.250Z");

        let whole: Record = serde_json::from_str(&json.replace(".250", "")).expect("parse record");
        let back = serde_json::to_value(&whole).expect("serialize record");
        assert_eq!(back["createdAt"], "2024-01-15T08:00:00.000Z");
    }
}

#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use itemdeck_model::{Category, ItemId, Record, Status};

pub fn base_time() -> DateTime<Utc> {
    "2024-03-01T12:00:00Z".parse().unwrap()
}

pub fn record(id: &str, name: &str, category: &str, value: f64, status: Status) -> Record {
    Record {
        id: ItemId::new(id).unwrap(),
        name: name.to_string(),
        category: Category::new(category).unwrap(),
        value,
        status,
        created_at: base_time(),
        description: None,
    }
}

/// Records `1..=n` with increasing creation times.
pub fn numbered(n: usize) -> Vec<Record> {
    (1..=n)
        .map(|i| {
            let mut item = record(&i.to_string(), &format!("Item {i}"), "A", i as f64, Status::Active);
            item.created_at = base_time() + Duration::minutes(i as i64);
            item
        })
        .collect()
}

pub fn ids(records: &[Record]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

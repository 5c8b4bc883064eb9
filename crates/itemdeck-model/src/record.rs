//! The record entity managed by the dashboard.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize, Serializer};

use crate::{Category, ItemId, Status};

/// One inventory record.
///
/// `id` and `created_at` are set when the record is created and are carried
/// over unchanged by every update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: ItemId,
    pub name: String,
    pub category: Category,
    /// Monetary value, `0 ..= 1_000_000` when it passed form validation.
    pub value: f64,
    pub status: Status,
    #[serde(serialize_with = "serialize_millis")]
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Record {
    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}

/// ISO-8601 with millisecond precision, e.g. `2024-01-15T08:00:00.000Z`.
fn serialize_millis<S: Serializer>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

//! View configuration: which records are shown and in what order.

use serde::{Deserialize, Serialize};

use crate::{Category, ModelError, SortDirection, SortField, Status};

/// Filter applied before sorting.
///
/// An empty `search` and `None` for the exact-match fields mean "no filter".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Case-insensitive substring matched against the record name.
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub status: Option<Status>,
}

impl FilterConfig {
    /// Build from raw form values where an empty string means "any".
    pub fn from_form(search: &str, category: &str, status: &str) -> Result<Self, ModelError> {
        let category = if category.trim().is_empty() {
            None
        } else {
            Some(Category::new(category)?)
        };
        let status = if status.trim().is_empty() {
            None
        } else {
            Some(status.parse()?)
        };
        Ok(Self {
            search: search.to_string(),
            category,
            status,
        })
    }

    /// True when no field restricts the view.
    pub fn is_neutral(&self) -> bool {
        self.search.is_empty() && self.category.is_none() && self.status.is_none()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    pub fn with_status(mut self, status: Option<Status>) -> Self {
        self.status = status;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// Next sort after clicking a column header: the active ascending column
    /// flips to descending, anything else starts ascending.
    pub fn toggled(self, field: SortField) -> Self {
        let direction = if self.field == field && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        Self { field, direction }
    }
}

impl Default for SortConfig {
    /// Newest records first.
    fn default() -> Self {
        Self {
            field: SortField::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}

//! Validation of record drafts before they reach the store.
//!
//! The store never re-validates what it is given, so every create and edit
//! path runs drafts through [`validate_draft`] first. All failing fields are
//! reported together, one [`FieldIssue`] per field.

#![deny(unsafe_code)]

pub mod rules;

use std::fmt;

use itemdeck_catalog::Catalog;
use itemdeck_model::{Category, Status};
use serde::{Deserialize, Serialize};

pub use rules::{
    DESCRIPTION_MAX_CHARS, DESCRIPTION_MIN_CHARS, NAME_MAX_CHARS, NAME_MIN_CHARS, VALUE_MAX,
    VALUE_MIN,
};

/// Raw form input for creating or editing a record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub name: String,
    pub category: String,
    pub value: f64,
    pub status: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Default for ItemDraft {
    /// Blank form: active status, zero value.
    fn default() -> Self {
        Self {
            name: String::new(),
            category: String::new(),
            value: 0.0,
            status: Status::Active.as_str().to_string(),
            description: None,
        }
    }
}

/// Draft that passed every rule, with typed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidItem {
    pub name: String,
    pub category: Category,
    pub value: f64,
    pub status: Status,
    pub description: Option<String>,
}

/// Form field an issue is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Category,
    Value,
    Status,
    Description,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Value => "value",
            Self::Status => "status",
            Self::Description => "description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIssue {
    pub field: Field,
    pub message: String,
}

/// Every issue found in one draft, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{}", summary(.issues))]
pub struct ValidationReport {
    pub issues: Vec<FieldIssue>,
}

fn summary(issues: &[FieldIssue]) -> String {
    match issues {
        [] => "no validation issues".to_string(),
        [only] => format!("{}: {}", only.field, only.message),
        many => format!("{} fields are invalid", many.len()),
    }
}

impl ValidationReport {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// First message for a field, as a form would show under the input.
    pub fn message_for(&self, field: Field) -> Option<&str> {
        self.issues
            .iter()
            .find(|issue| issue.field == field)
            .map(|issue| issue.message.as_str())
    }

    fn push(&mut self, field: Field, message: impl Into<String>) {
        self.issues.push(FieldIssue {
            field,
            message: message.into(),
        });
    }
}

/// Check a draft against the rules and the catalog's enumerations.
pub fn validate_draft(draft: &ItemDraft, catalog: &Catalog) -> Result<ValidItem, ValidationReport> {
    let mut report = ValidationReport::default();

    if let Some(message) = rules::check_name(&draft.name) {
        report.push(Field::Name, message);
    }

    let category = catalog.category(&draft.category).cloned();
    if category.is_none() {
        report.push(Field::Category, rules::CATEGORY_MESSAGE);
    }

    if let Some(message) = rules::check_value(draft.value) {
        report.push(Field::Value, message);
    }

    let status = draft
        .status
        .parse::<Status>()
        .ok()
        .filter(|s| catalog.contains_status(*s));
    if status.is_none() {
        report.push(Field::Status, rules::STATUS_MESSAGE);
    }

    let description = rules::normalize_description(draft.description.as_deref());
    if let Some(text) = description.as_deref()
        && let Some(message) = rules::check_description(text)
    {
        report.push(Field::Description, message);
    }

    match (category, status) {
        (Some(category), Some(status)) if report.is_empty() => Ok(ValidItem {
            name: draft.name.clone(),
            category,
            value: draft.value,
            status,
            description,
        }),
        _ => Err(report),
    }
}

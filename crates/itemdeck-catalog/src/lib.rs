//! Seed data contract for itemdeck.
//!
//! A catalog supplies two things:
//! - the closed enumerations (categories, statuses) used by filters, forms
//!   and validation
//! - the initial record collection used when the store starts empty
//!
//! The default catalog is embedded at compile time from `data/catalog.toml`.
//! A replacement can be loaded from any TOML file with the same shape.

#![deny(unsafe_code)]

pub mod error;

use std::collections::BTreeSet;
use std::path::Path;

use itemdeck_model::{Category, Record, Status};
use serde::Deserialize;

pub use crate::error::CatalogError;

const DEFAULT_CATALOG: &str = include_str!("../data/catalog.toml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    categories: Vec<Category>,
    statuses: Vec<Status>,
    #[serde(default)]
    items: Vec<Record>,
}

/// Enumerations plus seed records, checked for internal consistency.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    categories: Vec<Category>,
    statuses: Vec<Status>,
    items: Vec<Record>,
}

impl Catalog {
    /// The catalog shipped with the binary.
    ///
    /// # Panics
    ///
    /// Panics if the embedded catalog is malformed, which is a build defect.
    pub fn builtin() -> Self {
        match Self::from_toml_str(DEFAULT_CATALOG, "<builtin>") {
            Ok(catalog) => catalog,
            Err(error) => panic!("embedded catalog is invalid: {error}"),
        }
    }

    /// Load a catalog from a TOML file on disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        let catalog = Self::from_toml_str(&content, &path.display().to_string())?;
        tracing::info!(
            path = %path.display(),
            categories = catalog.categories.len(),
            items = catalog.items.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from TOML text. `origin` is only used in error messages.
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content).map_err(|source| CatalogError::Toml {
            origin: origin.to_string(),
            source,
        })?;
        Self::new(file.categories, file.statuses, file.items)
    }

    /// Assemble a catalog, rejecting duplicate ids and seed records that use
    /// values outside the enumerations.
    pub fn new(
        categories: Vec<Category>,
        statuses: Vec<Status>,
        items: Vec<Record>,
    ) -> Result<Self, CatalogError> {
        if categories.is_empty() {
            return Err(CatalogError::NoCategories);
        }
        if statuses.is_empty() {
            return Err(CatalogError::NoStatuses);
        }

        let mut seen = BTreeSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: item.id.to_string(),
                });
            }
            if !categories.contains(&item.category) {
                return Err(CatalogError::UnknownCategory {
                    id: item.id.to_string(),
                    category: item.category.to_string(),
                });
            }
            if !statuses.contains(&item.status) {
                return Err(CatalogError::UnknownStatus {
                    id: item.id.to_string(),
                    status: item.status.to_string(),
                });
            }
        }

        Ok(Self {
            categories,
            statuses,
            items,
        })
    }

    /// Categories in catalog order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    /// Seed records in catalog order.
    pub fn items(&self) -> &[Record] {
        &self.items
    }

    /// Exact, case-sensitive membership check.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.as_str() == name)
    }

    pub fn contains_category(&self, name: &str) -> bool {
        self.category(name).is_some()
    }

    pub fn contains_status(&self, status: Status) -> bool {
        self.statuses.contains(&status)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

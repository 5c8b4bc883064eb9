#![deny(unsafe_code)]

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML catalog {origin}: {source}")]
    Toml {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("catalog defines no categories")]
    NoCategories,

    #[error("catalog defines no statuses")]
    NoStatuses,

    #[error("duplicate seed item id: {id}")]
    DuplicateId { id: String },

    #[error("seed item {id} uses category {category:?} which is not in the catalog")]
    UnknownCategory { id: String, category: String },

    #[error("seed item {id} uses status {status} which is not in the catalog")]
    UnknownStatus { id: String, status: String },
}

impl CatalogError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

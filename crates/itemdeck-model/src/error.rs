use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid item id: {0:?}")]
    InvalidItemId(String),
    #[error("invalid category: {0:?}")]
    InvalidCategory(String),
    #[error("unknown status: {0:?} (expected active or inactive)")]
    UnknownStatus(String),
    #[error("unknown sort field: {0:?}")]
    UnknownSortField(String),
    #[error("unknown sort direction: {0:?} (expected asc or desc)")]
    UnknownSortDirection(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

use itemdeck_model::ItemId;
use itemdeck_validate::ValidationReport;
use thiserror::Error;

/// Why a create, update or delete workflow did not complete.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorkflowError {
    #[error("invalid item: {0}")]
    Invalid(#[from] ValidationReport),
    #[error("Item {id} not found")]
    NotFound { id: ItemId },
    /// A collaborator behind the workflow gave up; `message` may be empty.
    #[error("{message}")]
    Failed { message: String },
}

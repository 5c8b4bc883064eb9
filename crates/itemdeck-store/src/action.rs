//! Typed requests to change store state.

use itemdeck_model::{FilterConfig, ItemId, Record, SortConfig};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the whole collection.
    SetItems(Vec<Record>),
    /// Append one record.
    AddItem(Record),
    /// Replace the record with the same id; no-op when absent.
    UpdateItem(Record),
    /// Remove the record with this id; no-op when absent.
    DeleteItem(ItemId),
    SetFilters(FilterConfig),
    SetSort(SortConfig),
    SetLoading(bool),
    SetError(Option<String>),
}

impl Action {
    /// Stable name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetItems(_) => "set_items",
            Self::AddItem(_) => "add_item",
            Self::UpdateItem(_) => "update_item",
            Self::DeleteItem(_) => "delete_item",
            Self::SetFilters(_) => "set_filters",
            Self::SetSort(_) => "set_sort",
            Self::SetLoading(_) => "set_loading",
            Self::SetError(_) => "set_error",
        }
    }
}

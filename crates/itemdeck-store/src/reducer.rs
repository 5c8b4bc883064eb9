//! Pure state transition function.

use std::sync::Arc;

use itemdeck_model::Record;

use crate::{Action, AppState};

/// Produce the state that follows `state` after `action`.
///
/// The input is never modified. Branches the action does not touch are
/// carried over as-is; in particular `items` keeps the same allocation
/// whenever the collection does not change, including `UpdateItem` and
/// `DeleteItem` with an unknown id.
///
/// `AddItem` does not check for an existing id. Callers are expected to
/// supply fresh ids.
pub fn reduce(state: &AppState, action: Action) -> AppState {
    match action {
        Action::SetItems(items) => AppState {
            items: Arc::from(items),
            ..state.clone()
        },
        Action::AddItem(item) => {
            let mut items = Vec::with_capacity(state.items.len() + 1);
            items.extend_from_slice(&state.items);
            items.push(item);
            AppState {
                items: Arc::from(items),
                ..state.clone()
            }
        }
        Action::UpdateItem(item) => {
            if !state.items.iter().any(|existing| existing.id == item.id) {
                return state.clone();
            }
            let items: Vec<Record> = state
                .items
                .iter()
                .map(|existing| {
                    if existing.id == item.id {
                        item.clone()
                    } else {
                        existing.clone()
                    }
                })
                .collect();
            AppState {
                items: Arc::from(items),
                ..state.clone()
            }
        }
        Action::DeleteItem(id) => {
            if !state.items.iter().any(|existing| existing.id == id) {
                return state.clone();
            }
            let items: Vec<Record> = state
                .items
                .iter()
                .filter(|existing| existing.id != id)
                .cloned()
                .collect();
            AppState {
                items: Arc::from(items),
                ..state.clone()
            }
        }
        Action::SetFilters(filters) => AppState {
            filters,
            ..state.clone()
        },
        Action::SetSort(sort) => AppState {
            sort,
            ..state.clone()
        },
        Action::SetLoading(is_loading) => AppState {
            is_loading,
            ..state.clone()
        },
        Action::SetError(error) => AppState {
            error,
            ..state.clone()
        },
    }
}

//! The single owner of application state.

use std::sync::Arc;

use itemdeck_catalog::Catalog;
use itemdeck_model::{FilterConfig, ItemId, Record, SortConfig};

use crate::projection::ProjectionCache;
use crate::{Action, AppState, StoreConfig, reducer};

/// Change counters for the three inputs of the projection.
///
/// A counter moves only when its branch actually changed: a new `items`
/// allocation, or a filter/sort value different from the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Revisions {
    pub items: u64,
    pub filters: u64,
    pub sort: u64,
}

/// Read-only view handed to display code.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub items: Arc<[Record]>,
    pub filtered_items: Arc<[Record]>,
    pub filters: FilterConfig,
    pub sort: SortConfig,
    pub is_loading: bool,
    pub error: Option<String>,
}

/// Holds the current [`AppState`] and applies actions to it.
///
/// All changes go through [`Store::dispatch`]; readers get shared
/// references or a [`Snapshot`].
#[derive(Debug)]
pub struct Store {
    state: AppState,
    revisions: Revisions,
    projection: ProjectionCache,
    config: StoreConfig,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            state: AppState::new(config.default_sort),
            revisions: Revisions::default(),
            projection: ProjectionCache::new(),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn revisions(&self) -> Revisions {
        self.revisions
    }

    /// Run one action through the reducer and bump the revisions of the
    /// branches it changed.
    pub fn dispatch(&mut self, action: Action) {
        let kind = action.kind();
        match &action {
            Action::AddItem(item) if self.find_item(&item.id).is_some() => {
                tracing::warn!(id = %item.id, "adding record with an id that is already present");
            }
            Action::UpdateItem(item) if self.find_item(&item.id).is_none() => {
                tracing::warn!(id = %item.id, "update for unknown record ignored");
            }
            Action::DeleteItem(id) if self.find_item(id).is_none() => {
                tracing::warn!(%id, "delete for unknown record ignored");
            }
            _ => {}
        }

        let next = reducer::reduce(&self.state, action);

        if !Arc::ptr_eq(&next.items, &self.state.items) {
            self.revisions.items += 1;
        }
        if next.filters != self.state.filters {
            self.revisions.filters += 1;
        }
        if next.sort != self.state.sort {
            self.revisions.sort += 1;
        }
        self.state = next;

        tracing::debug!(
            action = kind,
            items = self.state.items.len(),
            revisions = ?self.revisions,
            "dispatched"
        );
    }

    /// The filtered and sorted view, recomputed only after a relevant change.
    pub fn filtered_items(&self) -> Arc<[Record]> {
        self.projection.get_or_compute(
            self.revisions,
            &self.state.items,
            &self.state.filters,
            &self.state.sort,
        )
    }

    /// Number of projection recomputations so far.
    pub fn projection_computations(&self) -> u64 {
        self.projection.computations()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            items: Arc::clone(&self.state.items),
            filtered_items: self.filtered_items(),
            filters: self.state.filters.clone(),
            sort: self.state.sort,
            is_loading: self.state.is_loading,
            error: self.state.error.clone(),
        }
    }

    pub fn find_item(&self, id: &ItemId) -> Option<&Record> {
        self.state.items.iter().find(|item| &item.id == id)
    }

    /// Load the catalog's seed records, but only into an empty store.
    ///
    /// Returns whether seeding happened.
    pub fn seed_if_empty(&mut self, catalog: &Catalog) -> bool {
        if !self.state.items.is_empty() {
            return false;
        }
        tracing::info!(count = catalog.items().len(), "seeding store from catalog");
        self.dispatch(Action::SetItems(catalog.items().to_vec()));
        true
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

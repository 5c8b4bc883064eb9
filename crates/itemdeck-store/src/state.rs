//! Canonical application state.

use std::sync::Arc;
use std::time::Duration;

use itemdeck_model::{FilterConfig, Record, SortConfig};

use crate::notification::DEFAULT_NOTIFICATION_TIMEOUT;

/// Everything the store owns.
///
/// `items` is shared behind an `Arc` so transitions that leave the
/// collection alone hand the same allocation to the next state.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    /// Records in insertion order.
    pub items: Arc<[Record]>,
    pub filters: FilterConfig,
    pub sort: SortConfig,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl AppState {
    /// Empty collection, neutral filters, the given sort.
    pub fn new(sort: SortConfig) -> Self {
        Self {
            items: Arc::from(Vec::new()),
            filters: FilterConfig::default(),
            sort,
            is_loading: false,
            error: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(SortConfig::default())
    }
}

/// Startup settings for a [`Store`](crate::Store).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    /// Sort applied before the user picks a column.
    pub default_sort: SortConfig,
    /// How long a notification stays visible.
    pub notification_timeout: Duration,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            default_sort: SortConfig::default(),
            notification_timeout: DEFAULT_NOTIFICATION_TIMEOUT,
        }
    }
}

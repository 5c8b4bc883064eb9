//! Client-side state engine for itemdeck.
//!
//! Data flows one way:
//!
//! - UI events become [`Action`]s, submitted through a [`Dispatch`]
//!   implementation (the [`Store`] itself or a [`Dispatcher`] handle).
//! - [`reduce`] turns the current [`AppState`] and one action into the next
//!   state without touching the input.
//! - The [`Store`] keeps per-branch revisions and hands out the filtered and
//!   sorted projection, recomputing it only when items, filters or sort
//!   actually changed.
//!
//! The [`NotificationChannel`] is independent of the data model and carries
//! the transient success/error/info messages shown after workflows run.

#![deny(unsafe_code)]

pub mod action;
pub mod dispatch;
pub mod error;
pub mod notification;
pub mod projection;
pub mod reducer;
pub mod state;
pub mod store;
pub mod workflow;

pub use action::Action;
pub use dispatch::{Dispatch, Dispatcher, ItemActions, SharedStore};
pub use error::WorkflowError;
pub use notification::{
    DEFAULT_NOTIFICATION_TIMEOUT, Notification, NotificationChannel, NotificationHandle,
    NotificationKind, Notifier, SharedNotifications,
};
pub use projection::{ProjectionCache, project};
pub use reducer::reduce;
pub use state::{AppState, StoreConfig};
pub use store::{Revisions, Snapshot, Store};
pub use workflow::{FALLBACK_ERROR_MESSAGE, ItemWorkflow};

//! Create, edit and delete flows that sit between the UI and the store.
//!
//! Each flow validates its input, dispatches exactly one item action on
//! success, and reports the outcome through a [`Notifier`]. Failures are
//! both notified and returned; the store is left untouched.

use chrono::Utc;
use itemdeck_catalog::Catalog;
use itemdeck_model::{ItemId, Record, SortConfig, SortField};
use itemdeck_validate::{ItemDraft, ValidItem, validate_draft};

use crate::dispatch::ItemActions;
use crate::notification::{NotificationKind, Notifier};
use crate::{Store, WorkflowError};

/// Shown when a failure carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "An unexpected error occurred";

const CREATED_MESSAGE: &str = "Item created successfully";
const UPDATED_MESSAGE: &str = "Item updated successfully";
const DELETED_MESSAGE: &str = "Item deleted successfully";

pub struct ItemWorkflow<'a, N: Notifier> {
    store: &'a mut Store,
    notifier: &'a mut N,
    catalog: &'a Catalog,
}

impl<'a, N: Notifier> ItemWorkflow<'a, N> {
    pub fn new(store: &'a mut Store, notifier: &'a mut N, catalog: &'a Catalog) -> Self {
        Self {
            store,
            notifier,
            catalog,
        }
    }

    pub fn store(&self) -> &Store {
        self.store
    }

    /// Validate `draft` and add it as a new record with a fresh id.
    pub fn create(&mut self, draft: &ItemDraft) -> Result<Record, WorkflowError> {
        let result = self.try_create(draft);
        self.report(result, CREATED_MESSAGE)
    }

    /// Replace the editable fields of record `id`, keeping its id and
    /// creation time.
    pub fn update(&mut self, id: &ItemId, draft: &ItemDraft) -> Result<Record, WorkflowError> {
        let result = self.try_update(id, draft);
        self.report(result, UPDATED_MESSAGE)
    }

    /// Remove record `id`, returning what was removed.
    pub fn delete(&mut self, id: &ItemId) -> Result<Record, WorkflowError> {
        let result = self.try_delete(id);
        self.report(result, DELETED_MESSAGE)
    }

    /// Column-header click: see [`SortConfig::toggled`].
    pub fn toggle_sort(&mut self, field: SortField) -> SortConfig {
        let next = self.store.state().sort.toggled(field);
        self.store.set_sort(next);
        next
    }

    fn try_create(&mut self, draft: &ItemDraft) -> Result<Record, WorkflowError> {
        let valid = validate_draft(draft, self.catalog)?;
        let record = into_record(valid, ItemId::generate(), Utc::now());
        self.store.add_item(record.clone());
        Ok(record)
    }

    fn try_update(&mut self, id: &ItemId, draft: &ItemDraft) -> Result<Record, WorkflowError> {
        let existing = self
            .store
            .find_item(id)
            .ok_or_else(|| WorkflowError::NotFound { id: id.clone() })?;
        let valid = validate_draft(draft, self.catalog)?;
        let record = into_record(valid, existing.id.clone(), existing.created_at);
        self.store.update_item(record.clone());
        Ok(record)
    }

    fn try_delete(&mut self, id: &ItemId) -> Result<Record, WorkflowError> {
        let existing = self
            .store
            .find_item(id)
            .cloned()
            .ok_or_else(|| WorkflowError::NotFound { id: id.clone() })?;
        self.store.delete_item(id.clone());
        Ok(existing)
    }

    fn report(
        &mut self,
        result: Result<Record, WorkflowError>,
        success: &str,
    ) -> Result<Record, WorkflowError> {
        match &result {
            Ok(record) => {
                tracing::info!(id = %record.id, "{success}");
                self.notifier
                    .notify(success.to_string(), NotificationKind::Success);
            }
            Err(error) => self.notify_failure(error),
        }
        result
    }

    /// Route a failure reported by a collaborator outside the store, such
    /// as a backend call wrapped around one of the flows above.
    pub fn fail(&mut self, message: impl Into<String>) -> WorkflowError {
        let error = WorkflowError::Failed {
            message: message.into(),
        };
        self.notify_failure(&error);
        error
    }

    fn notify_failure(&mut self, error: &WorkflowError) {
        tracing::error!(%error, "workflow failed");
        let mut message = error.to_string();
        if message.trim().is_empty() {
            message = FALLBACK_ERROR_MESSAGE.to_string();
        }
        self.notifier.notify(message, NotificationKind::Error);
    }
}

fn into_record(valid: ValidItem, id: ItemId, created_at: chrono::DateTime<Utc>) -> Record {
    Record {
        id,
        name: valid.name,
        category: valid.category,
        value: valid.value,
        status: valid.status,
        created_at,
        description: valid.description,
    }
}

#[cfg(test)]
mod tests {
    use itemdeck_model::{SortDirection, Status};

    use super::*;
    use crate::NotificationChannel;

    fn draft(name: &str) -> ItemDraft {
        ItemDraft {
            name: name.to_string(),
            category: "IT".to_string(),
            value: 250.0,
            status: "active".to_string(),
            description: Some("Portable speaker with case".to_string()),
        }
    }

    fn seeded() -> (Store, Catalog) {
        let catalog = Catalog::builtin();
        let mut store = Store::default();
        store.seed_if_empty(&catalog);
        (store, catalog)
    }

    #[test]
    fn create_adds_record_and_notifies() {
        let (mut store, catalog) = seeded();
        let mut channel = NotificationChannel::default();
        let before = store.state().items.len();

        let record = ItemWorkflow::new(&mut store, &mut channel, &catalog)
            .create(&draft("Speaker"))
            .unwrap();

        assert_eq!(store.state().items.len(), before + 1);
        assert_eq!(store.find_item(&record.id), Some(&record));
        let shown = channel.current().unwrap();
        assert_eq!(shown.message, "Item created successfully");
        assert_eq!(shown.kind, NotificationKind::Success);
    }

    #[test]
    fn update_keeps_identity_and_creation_time() {
        let (mut store, catalog) = seeded();
        let mut channel = NotificationChannel::default();
        let original = store.state().items[0].clone();

        let mut edit = draft("Renamed item");
        edit.status = "inactive".to_string();
        let updated = ItemWorkflow::new(&mut store, &mut channel, &catalog)
            .update(&original.id, &edit)
            .unwrap();

        assert_eq!(updated.id, original.id);
        assert_eq!(updated.created_at, original.created_at);
        assert_eq!(updated.status, Status::Inactive);
        assert_eq!(store.find_item(&original.id).unwrap().name, "Renamed item");
        assert_eq!(channel.current().unwrap().message, "Item updated successfully");
    }

    #[test]
    fn missing_record_is_reported_as_error() {
        let (mut store, catalog) = seeded();
        let mut channel = NotificationChannel::default();
        let items = store.state().items.clone();
        let id = ItemId::new("missing").unwrap();

        let error = ItemWorkflow::new(&mut store, &mut channel, &catalog)
            .delete(&id)
            .unwrap_err();

        assert_eq!(error, WorkflowError::NotFound { id });
        assert!(std::sync::Arc::ptr_eq(&items, &store.state().items));
        let shown = channel.current().unwrap();
        assert_eq!(shown.kind, NotificationKind::Error);
        assert_eq!(shown.message, "Item missing not found");
    }

    #[test]
    fn invalid_draft_leaves_store_alone() {
        let (mut store, catalog) = seeded();
        let mut channel = NotificationChannel::default();
        let revisions = store.revisions();

        let result = ItemWorkflow::new(&mut store, &mut channel, &catalog).create(&draft("ab"));

        assert!(matches!(result, Err(WorkflowError::Invalid(_))));
        assert_eq!(store.revisions(), revisions);
        assert_eq!(channel.current().unwrap().kind, NotificationKind::Error);
    }

    #[test]
    fn failure_without_message_shows_fallback() {
        let (mut store, catalog) = seeded();
        let mut channel = NotificationChannel::default();
        let revisions = store.revisions();
        let mut workflow = ItemWorkflow::new(&mut store, &mut channel, &catalog);

        let error = workflow.fail("");
        assert_eq!(error, WorkflowError::Failed { message: String::new() });
        let shown = channel.current().unwrap();
        assert_eq!(shown.kind, NotificationKind::Error);
        assert_eq!(shown.message, "An unexpected error occurred");
        assert_eq!(store.revisions(), revisions);
    }

    #[test]
    fn failure_message_is_shown_as_is() {
        let (mut store, catalog) = seeded();
        let mut channel = NotificationChannel::default();

        ItemWorkflow::new(&mut store, &mut channel, &catalog).fail("backend unavailable");

        let shown = channel.current().unwrap();
        assert_eq!(shown.kind, NotificationKind::Error);
        assert_eq!(shown.message, "backend unavailable");
    }

    #[test]
    fn delete_returns_removed_record() {
        let (mut store, catalog) = seeded();
        let mut channel = NotificationChannel::default();
        let target = store.state().items[1].clone();

        let removed = ItemWorkflow::new(&mut store, &mut channel, &catalog)
            .delete(&target.id)
            .unwrap();

        assert_eq!(removed, target);
        assert!(store.find_item(&target.id).is_none());
        assert_eq!(channel.current().unwrap().message, "Item deleted successfully");
    }

    #[test]
    fn toggle_sort_follows_header_rules() {
        let (mut store, catalog) = seeded();
        let mut channel = NotificationChannel::default();
        let mut workflow = ItemWorkflow::new(&mut store, &mut channel, &catalog);

        let first = workflow.toggle_sort(SortField::Name);
        assert_eq!(first, SortConfig::new(SortField::Name, SortDirection::Asc));
        let second = workflow.toggle_sort(SortField::Name);
        assert_eq!(second, SortConfig::new(SortField::Name, SortDirection::Desc));
        let third = workflow.toggle_sort(SortField::Name);
        assert_eq!(third.direction, SortDirection::Asc);
        assert_eq!(store.state().sort, third);
    }
}

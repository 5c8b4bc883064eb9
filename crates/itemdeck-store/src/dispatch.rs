//! Command surface for requesting state changes.
//!
//! [`Dispatch`] is the one seam through which actions reach a store.
//! [`ItemActions`] layers one method per action kind on top of it and is
//! implemented for every dispatcher, so the typed calls are bound once to
//! the dispatch mechanism rather than rebuilt by each caller.
//!
//! UI code that needs to hand out a long-lived, clonable dispatch handle
//! wraps the store in a [`SharedStore`] and uses its [`Dispatcher`].

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use itemdeck_model::{FilterConfig, ItemId, Record, SortConfig};

use crate::{Action, Snapshot, Store};

pub trait Dispatch {
    fn dispatch(&mut self, action: Action);
}

impl Dispatch for Store {
    fn dispatch(&mut self, action: Action) {
        Store::dispatch(self, action);
    }
}

/// One call per action kind.
pub trait ItemActions: Dispatch {
    fn set_items(&mut self, items: Vec<Record>) {
        self.dispatch(Action::SetItems(items));
    }

    fn add_item(&mut self, item: Record) {
        self.dispatch(Action::AddItem(item));
    }

    fn update_item(&mut self, item: Record) {
        self.dispatch(Action::UpdateItem(item));
    }

    fn delete_item(&mut self, id: ItemId) {
        self.dispatch(Action::DeleteItem(id));
    }

    fn set_filters(&mut self, filters: FilterConfig) {
        self.dispatch(Action::SetFilters(filters));
    }

    fn set_sort(&mut self, sort: SortConfig) {
        self.dispatch(Action::SetSort(sort));
    }

    fn set_loading(&mut self, is_loading: bool) {
        self.dispatch(Action::SetLoading(is_loading));
    }

    fn set_error(&mut self, error: Option<String>) {
        self.dispatch(Action::SetError(error));
    }
}

impl<D: Dispatch + ?Sized> ItemActions for D {}

/// A store shared between the views of a single-threaded UI.
///
/// Cloning shares the same store. The [`Dispatcher`] is created once with
/// the store and every call to [`SharedStore::dispatcher`] returns a clone
/// of that same binding.
#[derive(Debug, Clone)]
pub struct SharedStore {
    inner: Rc<RefCell<Store>>,
    dispatcher: Dispatcher,
}

impl SharedStore {
    pub fn new(store: Store) -> Self {
        let inner = Rc::new(RefCell::new(store));
        let dispatcher = Dispatcher {
            store: Rc::downgrade(&inner),
        };
        Self { inner, dispatcher }
    }

    pub fn dispatcher(&self) -> Dispatcher {
        self.dispatcher.clone()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.inner.borrow().snapshot()
    }

    /// Run `f` with shared access to the store.
    pub fn read<R>(&self, f: impl FnOnce(&Store) -> R) -> R {
        f(&self.inner.borrow())
    }
}

/// Dispatch handle that does not keep the store alive.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    store: Weak<RefCell<Store>>,
}

impl Dispatcher {
    /// True when both handles feed the same store binding.
    pub fn same_binding(&self, other: &Self) -> bool {
        Weak::ptr_eq(&self.store, &other.store)
    }

    pub fn is_live(&self) -> bool {
        self.store.strong_count() > 0
    }
}

impl Dispatch for Dispatcher {
    /// # Panics
    ///
    /// Panics when every [`SharedStore`] owning the store has been dropped,
    /// or when called while the store is already borrowed by a reader.
    /// Both are programming errors in the caller.
    fn dispatch(&mut self, action: Action) {
        let Some(store) = self.store.upgrade() else {
            panic!(
                "{} dispatched outside of a live store: its SharedStore was dropped",
                action.kind()
            );
        };
        store.borrow_mut().dispatch(action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatcher_binding_is_stable() {
        let shared = SharedStore::new(Store::default());
        let a = shared.dispatcher();
        let b = shared.clone().dispatcher();
        assert!(a.same_binding(&b));

        let other = SharedStore::new(Store::default());
        assert!(!a.same_binding(&other.dispatcher()));
    }

    #[test]
    fn dispatcher_reaches_the_shared_store() {
        let shared = SharedStore::new(Store::default());
        let mut dispatcher = shared.dispatcher();
        dispatcher.set_loading(true);
        assert!(shared.snapshot().is_loading);
    }

    #[test]
    #[should_panic(expected = "dispatched outside of a live store")]
    fn dispatch_after_store_dropped_panics() {
        let shared = SharedStore::new(Store::default());
        let mut dispatcher = shared.dispatcher();
        drop(shared);
        assert!(!dispatcher.is_live());
        dispatcher.set_loading(true);
    }
}

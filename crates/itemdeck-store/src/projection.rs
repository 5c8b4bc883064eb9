//! Filtered and sorted view of the record collection.

use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::sync::Arc;

use itemdeck_model::{FilterConfig, Record, SortConfig, SortDirection, SortField};

use crate::store::Revisions;

/// Compute the view list for `items`.
///
/// A record is kept when its name contains `filters.search` (ignoring case)
/// and it matches the category and status filters that are set. The kept
/// records are then stable-sorted on `sort.field`; ties, and pairs where the
/// field is absent on either side, keep their input order in both
/// directions. The input slice is not modified.
pub fn project(items: &[Record], filters: &FilterConfig, sort: &SortConfig) -> Vec<Record> {
    let mut result: Vec<Record> = if filters.is_neutral() {
        items.to_vec()
    } else {
        let needle = filters.search.to_lowercase();
        items
            .iter()
            .filter(|item| matches(item, filters, &needle))
            .cloned()
            .collect()
    };

    let field = sort.field;
    let direction = sort.direction;
    result = merge_sort_by(result, &mut |a: &Record, b: &Record| {
        let ordering = compare_by(field, a, b);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    result
}

/// Stable top-down merge sort.
///
/// The record comparator is not a total order once a field is absent (an
/// absent value ties with everything), and `slice::sort_by` may panic on
/// such comparators. This one always terminates and keeps ties in input
/// order.
fn merge_sort_by<T, F>(mut items: Vec<T>, compare: &mut F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    if items.len() < 2 {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort_by(items, compare);
    let right = merge_sort_by(right, compare);

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare(r, l) == Ordering::Less,
            _ => break,
        };
        let next = if take_right { right.next() } else { left.next() };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    merged
}

fn matches(item: &Record, filters: &FilterConfig, needle: &str) -> bool {
    let matches_search = needle.is_empty() || item.name.to_lowercase().contains(needle);
    let matches_category = filters
        .category
        .as_ref()
        .is_none_or(|category| &item.category == category);
    let matches_status = filters.status.is_none_or(|status| item.status == status);
    matches_search && matches_category && matches_status
}

/// Natural ascending order of one field.
fn compare_by(field: SortField, a: &Record, b: &Record) -> Ordering {
    match field {
        SortField::Id => a.id.cmp(&b.id),
        SortField::Name => a.name.cmp(&b.name),
        SortField::Category => a.category.cmp(&b.category),
        // NaN only gets here when a caller skipped validation; treat as a tie.
        SortField::Value => a.value.partial_cmp(&b.value).unwrap_or(Ordering::Equal),
        SortField::Status => a.status.as_str().cmp(b.status.as_str()),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::Description => match (&a.description, &b.description) {
            (Some(a), Some(b)) => a.cmp(b),
            _ => Ordering::Equal,
        },
    }
}

/// Memoized projection keyed on store revisions.
///
/// Holds at most one result. A lookup with the same [`Revisions`] as the
/// cached entry returns the cached list; anything else recomputes.
#[derive(Debug, Default)]
pub struct ProjectionCache {
    entry: RefCell<Option<(Revisions, Arc<[Record]>)>>,
    computations: Cell<u64>,
}

impl ProjectionCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_compute(
        &self,
        key: Revisions,
        items: &[Record],
        filters: &FilterConfig,
        sort: &SortConfig,
    ) -> Arc<[Record]> {
        if let Some((cached_key, output)) = self.entry.borrow().as_ref()
            && *cached_key == key
        {
            return Arc::clone(output);
        }

        let output: Arc<[Record]> = Arc::from(project(items, filters, sort));
        self.computations.set(self.computations.get() + 1);
        tracing::debug!(
            input = items.len(),
            output = output.len(),
            field = %sort.field,
            direction = %sort.direction,
            "recomputed projection"
        );
        *self.entry.borrow_mut() = Some((key, Arc::clone(&output)));
        output
    }

    /// How many times the projection was actually computed.
    pub fn computations(&self) -> u64 {
        self.computations.get()
    }

    pub fn clear(&self) {
        self.entry.borrow_mut().take();
    }
}

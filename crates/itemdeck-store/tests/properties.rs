mod common;

use std::sync::Arc;

use itemdeck_model::{
    Category, FilterConfig, ItemId, Record, SortConfig, SortDirection, SortField, Status,
};
use itemdeck_store::{Action, AppState, project, reduce};
use proptest::prelude::*;

fn arb_status() -> impl Strategy<Value = Status> {
    prop_oneof![Just(Status::Active), Just(Status::Inactive)]
}

fn arb_category() -> impl Strategy<Value = Category> {
    prop_oneof![Just("A"), Just("B"), Just("C")].prop_map(|c| Category::new(c).unwrap())
}

fn arb_items() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec(
        ("[a-zA-Z ]{1,12}", arb_category(), 0.0..1_000_000.0f64, arb_status()),
        0..24,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(i, (name, category, value, status))| Record {
                id: ItemId::new(format!("id-{i}")).unwrap(),
                name,
                category,
                value,
                status,
                created_at: common::base_time(),
                description: None,
            })
            .collect()
    })
}

fn arb_filters() -> impl Strategy<Value = FilterConfig> {
    (
        "[a-z]{0,3}",
        prop::option::of(arb_category()),
        prop::option::of(arb_status()),
    )
        .prop_map(|(search, category, status)| FilterConfig {
            search,
            category,
            status,
        })
}

fn state_with(items: Vec<Record>) -> AppState {
    reduce(&AppState::default(), Action::SetItems(items))
}

proptest! {
    #[test]
    fn add_then_delete_is_identity(items in arb_items()) {
        let state = state_with(items);
        let fresh = common::record("fresh", "Fresh", "A", 1.0, Status::Active);
        let added = reduce(&state, Action::AddItem(fresh));
        let removed = reduce(&added, Action::DeleteItem(ItemId::new("fresh").unwrap()));
        prop_assert_eq!(&removed.items[..], &state.items[..]);
    }

    #[test]
    fn neutral_filter_keeps_every_record(
        items in arb_items(),
        field in prop::sample::select(SortField::ALL.to_vec()),
        descending in any::<bool>(),
    ) {
        let direction = if descending { SortDirection::Desc } else { SortDirection::Asc };
        let out = project(&items, &FilterConfig::default(), &SortConfig::new(field, direction));
        let mut kept: Vec<&ItemId> = out.iter().map(|item| &item.id).collect();
        let mut expected: Vec<&ItemId> = items.iter().map(|item| &item.id).collect();
        kept.sort();
        expected.sort();
        prop_assert_eq!(kept, expected);
    }

    #[test]
    fn every_result_satisfies_the_filters(items in arb_items(), filters in arb_filters()) {
        let out = project(&items, &filters, &SortConfig::default());
        let needle = filters.search.to_lowercase();
        for item in &out {
            prop_assert!(item.name.to_lowercase().contains(&needle));
            if let Some(category) = &filters.category {
                prop_assert_eq!(&item.category, category);
            }
            if let Some(status) = filters.status {
                prop_assert_eq!(item.status, status);
            }
        }
        let expected = items
            .iter()
            .filter(|item| item.name.to_lowercase().contains(&needle))
            .filter(|item| filters.category.as_ref().is_none_or(|c| &item.category == c))
            .filter(|item| filters.status.is_none_or(|s| item.status == s))
            .count();
        prop_assert_eq!(out.len(), expected);
    }

    #[test]
    fn value_sort_is_monotonic(items in arb_items(), descending in any::<bool>()) {
        let direction = if descending { SortDirection::Desc } else { SortDirection::Asc };
        let out = project(&items, &FilterConfig::default(), &SortConfig::new(SortField::Value, direction));
        for pair in out.windows(2) {
            if descending {
                prop_assert!(pair[0].value >= pair[1].value);
            } else {
                prop_assert!(pair[0].value <= pair[1].value);
            }
        }
    }

    #[test]
    fn update_with_unknown_id_changes_nothing(items in arb_items()) {
        let state = state_with(items);
        let ghost = common::record("ghost", "Ghost", "A", 1.0, Status::Active);
        let next = reduce(&state, Action::UpdateItem(ghost));
        prop_assert!(Arc::ptr_eq(&next.items, &state.items));
        prop_assert_eq!(next, state);
    }

    #[test]
    fn set_filters_is_idempotent(items in arb_items(), filters in arb_filters()) {
        let state = state_with(items);
        let once = reduce(&state, Action::SetFilters(filters.clone()));
        let twice = reduce(&once, Action::SetFilters(filters));
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn projection_leaves_input_untouched(items in arb_items(), filters in arb_filters()) {
        let before = items.clone();
        let _ = project(&items, &filters, &SortConfig::new(SortField::Name, SortDirection::Desc));
        prop_assert_eq!(items, before);
    }
}

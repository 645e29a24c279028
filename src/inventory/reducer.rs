use crate::mvi::Reducer;

use super::intent::InventoryIntent;
use super::state::InventorySnapshot;

/// Reducer for inventory transitions.
///
/// Pure function. Sending the committed value to the runtime is the
/// store's job, around the `Commit` dispatch.
pub struct InventoryReducer;

impl Reducer for InventoryReducer {
    type State = InventorySnapshot;
    type Intent = InventoryIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            InventoryIntent::Collect { kind, worth } => state.record(kind, worth),
            InventoryIntent::Commit => state.zero(),
        }
        state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inventory::ItemKind;

    fn collect(state: InventorySnapshot, name: &str) -> InventorySnapshot {
        InventoryReducer::reduce(
            state,
            InventoryIntent::Collect {
                kind: ItemKind::parse(name).unwrap(),
                worth: 50,
            },
        )
    }

    #[test]
    fn collect_new_kind_starts_at_one() {
        let state = collect(InventorySnapshot::default(), "pear");
        assert_eq!(state.count(&ItemKind::parse("pear").unwrap()), 1);
        assert_eq!(state.value(), 50);
    }

    #[test]
    fn repeated_collects_are_not_coalesced() {
        let state = collect(InventorySnapshot::default(), "pear");
        let state = collect(state, "pear");
        let state = collect(state, "pear");
        assert_eq!(state.count(&ItemKind::parse("pear").unwrap()), 3);
        assert_eq!(state.value(), 150);
    }

    #[test]
    fn commit_zeroes_counts_and_value() {
        let state = collect(InventorySnapshot::default(), "pear");
        let state = collect(state, "grape");
        let state = InventoryReducer::reduce(state, InventoryIntent::Commit);

        assert!(state.is_zeroed());
        let kinds: Vec<&str> = state.known_kinds().map(ItemKind::as_str).collect();
        assert_eq!(kinds, vec!["pear", "grape"]);
    }

    #[test]
    fn commit_on_empty_is_identity() {
        let empty = InventorySnapshot::default();
        let state = InventoryReducer::reduce(empty.clone(), InventoryIntent::Commit);
        assert_eq!(state, empty);
    }

    #[test]
    fn collect_after_commit_keeps_original_order() {
        let state = collect(InventorySnapshot::default(), "pear");
        let state = collect(state, "grape");
        let state = InventoryReducer::reduce(state, InventoryIntent::Commit);
        let state = collect(state, "grape");
        let state = collect(state, "pear");

        let populated: Vec<&str> = state.populated().map(|(k, _)| k.as_str()).collect();
        assert_eq!(populated, vec!["pear", "grape"]);
    }
}

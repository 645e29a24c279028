use crate::mvi::Reducer;

use super::intent::LoadIntent;
use super::state::LoadState;

/// Reducer for load state transitions.
///
/// Anything out of order is a no-op, which is what keeps `load`
/// idempotent and `Failed` terminal.
pub struct LoadReducer;

impl Reducer for LoadReducer {
    type State = LoadState;
    type Intent = LoadIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (LoadState::Unloaded, LoadIntent::Begin) => LoadState::Loading,
            (LoadState::Loading, LoadIntent::Instantiated) => LoadState::Ready,
            (LoadState::Loading, LoadIntent::Rejected { reason }) => LoadState::Failed(reason),
            (other, _) => other,
        }
    }
}

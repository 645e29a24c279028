use super::intent::Intent;
use super::state::ViewState;

/// The only place where a state transition happens.
pub trait Reducer {
    type State: ViewState;
    type Intent: Intent;

    /// `(State, Intent) -> State`, with no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

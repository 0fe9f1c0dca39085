use super::intent::Intent;
use super::state::UiState;

/// `(State, Intent) -> State`, the only place state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

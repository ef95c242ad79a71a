//! Reducer trait for MVI architecture.

use crate::action::Action;

use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> State
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Process an intent and return the new state.
    ///
    /// This should be a pure function with no side effects.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;

    /// Process a store-wide action.
    ///
    /// Actions addressed to other families leave the state untouched, so the
    /// returned value is the very same state that was passed in.
    fn reduce_action(state: Self::State, action: &Action) -> Self::State {
        match Self::Intent::from_action(action) {
            Some(intent) => Self::reduce(state, intent.clone()),
            None => state,
        }
    }
}

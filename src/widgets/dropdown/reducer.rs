use crate::mvi::Reducer;

use super::intent::DropdownIntent;
use super::state::{DropdownSlice, DropdownState};

pub struct DropdownReducer;

impl Reducer for DropdownReducer {
    type State = DropdownSlice;
    type Intent = DropdownIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DropdownIntent::Add { id } => state.insert(DropdownState { id, opened: false }),
            DropdownIntent::Remove { id } => state.remove(&id),
            DropdownIntent::Toggle { id } => state.update(&id, |dropdown| DropdownState {
                opened: !dropdown.opened,
                ..dropdown.clone()
            }),
            // Closing a closed dropdown yields an equal record, the slice keeps its reference.
            DropdownIntent::Close { id } => state.update(&id, |dropdown| DropdownState {
                opened: false,
                ..dropdown.clone()
            }),
        }
    }
}

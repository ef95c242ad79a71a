use crate::mvi::Reducer;

use super::intent::PerPageIntent;
use super::state::{PerPageSlice, PerPageState};

pub struct PerPageReducer;

impl Reducer for PerPageReducer {
    type State = PerPageSlice;
    type Intent = PerPageIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PerPageIntent::Add { id, per_page } => state.insert(PerPageState { id, per_page }),
            PerPageIntent::Remove { id } => state.remove(&id),
            PerPageIntent::Change { id, per_page } => state.update(&id, |current| PerPageState {
                per_page,
                ..current.clone()
            }),
        }
    }
}

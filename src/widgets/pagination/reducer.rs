use crate::mvi::Reducer;

use super::intent::PaginationIntent;
use super::state::{PaginationSlice, PaginationState};

pub struct PaginationReducer;

impl Reducer for PaginationReducer {
    type State = PaginationSlice;
    type Intent = PaginationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PaginationIntent::Add { id } => state.insert(PaginationState { id, page_nb: 0 }),
            PaginationIntent::Remove { id } => state.remove(&id),
            PaginationIntent::ChangePage { id, page_nb } => {
                state.update(&id, |pagination| PaginationState {
                    page_nb,
                    ..pagination.clone()
                })
            }
            PaginationIntent::Reset { id } => state.update(&id, |pagination| PaginationState {
                page_nb: 0,
                ..pagination.clone()
            }),
        }
    }
}

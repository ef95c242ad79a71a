use crate::mvi::Reducer;

use super::intent::FilterIntent;
use super::state::{FilterSlice, FilterState};

pub struct FilterReducer;

impl Reducer for FilterReducer {
    type State = FilterSlice;
    type Intent = FilterIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FilterIntent::Add { id } => state.insert(FilterState {
                id,
                filter_text: String::new(),
            }),
            FilterIntent::Remove { id } => state.remove(&id),
            FilterIntent::Change { id, filter_text } => state.update(&id, |filter| FilterState {
                filter_text,
                ..filter.clone()
            }),
        }
    }
}

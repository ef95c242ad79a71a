use crate::mvi::Reducer;

use super::intent::LoadingIntent;
use super::state::{LoadingSlice, LoadingState};

pub struct LoadingReducer;

impl Reducer for LoadingReducer {
    type State = LoadingSlice;
    type Intent = LoadingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LoadingIntent::Add { id, is_on } => state.insert(LoadingState { id, is_on }),
            LoadingIntent::Remove { id } => state.remove(&id),
            LoadingIntent::TurnOn { ids } => switch(state, &ids, true),
            LoadingIntent::TurnOff { ids } => switch(state, &ids, false),
        }
    }
}

fn switch(state: LoadingSlice, ids: &[String], is_on: bool) -> LoadingSlice {
    if ids.is_empty() {
        return state;
    }
    state.update_where(|loading| {
        ids.contains(&loading.id).then(|| LoadingState {
            is_on,
            ..loading.clone()
        })
    })
}

use crate::mvi::Reducer;

use super::intent::ListBoxIntent;
use super::state::{ListBoxSlice, ListBoxState};

pub struct ListBoxReducer;

impl Reducer for ListBoxReducer {
    type State = ListBoxSlice;
    type Intent = ListBoxIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListBoxIntent::Add { id, selected, multi } => state.insert(ListBoxState { id, selected, multi }),
            ListBoxIntent::Remove { id } => state.remove(&id),
            ListBoxIntent::Select { id, value } => state.update(&id, |list_box| {
                let selected = if list_box.multi {
                    let mut selected = list_box.selected.clone();
                    if !selected.contains(&value) {
                        selected.push(value);
                    }
                    selected
                } else {
                    vec![value]
                };
                ListBoxState {
                    selected,
                    ..list_box.clone()
                }
            }),
            ListBoxIntent::Unselect { id, value } => state.update(&id, |list_box| ListBoxState {
                selected: list_box
                    .selected
                    .iter()
                    .filter(|selected| **selected != value)
                    .cloned()
                    .collect(),
                ..list_box.clone()
            }),
            ListBoxIntent::Clear { id } => state.update(&id, |list_box| ListBoxState {
                selected: Vec::new(),
                ..list_box.clone()
            }),
        }
    }
}

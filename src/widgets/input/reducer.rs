use crate::mvi::Reducer;

use super::intent::InputIntent;
use super::state::{InputSlice, InputState};

pub struct InputReducer;

impl Reducer for InputReducer {
    type State = InputSlice;
    type Intent = InputIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            InputIntent::Add {
                id,
                value,
                valid,
                disabled,
            } => state.insert(InputState {
                id,
                value,
                valid,
                disabled,
            }),
            InputIntent::Remove { id } => state.remove(&id),
            InputIntent::Change { id, value, valid } => state.update(&id, |input| InputState {
                value,
                valid,
                ..input.clone()
            }),
            InputIntent::SetDisabled { id, disabled } => state.update(&id, |input| InputState {
                disabled,
                ..input.clone()
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_input() -> InputSlice {
        InputReducer::reduce(InputSlice::default(), InputIntent::add("name", "", true, false))
    }

    #[test]
    fn change_sets_value_and_validity() {
        let state = InputReducer::reduce(with_input(), InputIntent::change("name", "x", false));
        let input = state.find("name").unwrap();
        assert_eq!(input.value, "x");
        assert!(!input.valid);
        assert!(!input.disabled);
    }

    #[test]
    fn set_disabled_keeps_value() {
        let state = InputReducer::reduce(with_input(), InputIntent::change("name", "x", true));
        let state = InputReducer::reduce(state, InputIntent::set_disabled("name", true));
        let input = state.find("name").unwrap();
        assert_eq!(input.value, "x");
        assert!(input.disabled);
    }
}

use crate::mvi::Reducer;

use super::intent::ActionBarIntent;
use super::state::{ActionBarSlice, ActionBarState};

pub struct ActionBarReducer;

impl Reducer for ActionBarReducer {
    type State = ActionBarSlice;
    type Intent = ActionBarIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ActionBarIntent::Add { id } => state.insert(ActionBarState {
                id,
                actions: Vec::new(),
            }),
            ActionBarIntent::Remove { id } => state.remove(&id),
            ActionBarIntent::AddActions { id, actions } => state.update(&id, |bar| ActionBarState {
                id: bar.id.clone(),
                actions,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::action_bar::ActionOption;

    #[test]
    fn add_actions_replaces_previous_ones() {
        let state = ActionBarReducer::reduce(ActionBarSlice::default(), ActionBarIntent::add("bar"));
        let state = ActionBarReducer::reduce(
            state,
            ActionBarIntent::add_actions("bar", vec![ActionOption::new("edit")]),
        );
        let state = ActionBarReducer::reduce(
            state,
            ActionBarIntent::add_actions("bar", vec![ActionOption::new("delete").primary()]),
        );

        let bar = state.find("bar").unwrap();
        assert_eq!(bar.actions.len(), 1);
        assert_eq!(bar.actions[0].name, "delete");
        assert!(bar.actions[0].primary);
    }

    #[test]
    fn add_actions_to_unknown_bar_is_ignored() {
        let before = ActionBarSlice::default();
        let after = ActionBarReducer::reduce(
            before.clone(),
            ActionBarIntent::add_actions("bar", vec![ActionOption::new("edit")]),
        );
        assert!(after.ptr_eq(&before));
    }
}

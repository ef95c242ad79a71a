use crate::action::Action;
use crate::binder::WidgetBinding;
use crate::store::AppState;

use super::intent::ActionBarIntent;
use super::state::ActionOption;

/// Bar listing the actions of a table. Its id is the table id.
pub struct ActionBar;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionBarProps {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionBarView {
    pub actions: Vec<ActionOption>,
}

impl ActionBarProps {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl WidgetBinding for ActionBar {
    type OwnProps = ActionBarProps;
    type StateProps = ActionBarView;

    fn select(state: &AppState, props: &Self::OwnProps) -> Self::StateProps {
        ActionBarView {
            actions: state
                .action_bars
                .find(&props.id)
                .map(|bar| bar.actions.clone())
                .unwrap_or_default(),
        }
    }

    fn mount_actions(props: &Self::OwnProps) -> Vec<Action> {
        vec![ActionBarIntent::add(&props.id).into()]
    }

    fn unmount_actions(props: &Self::OwnProps) -> Vec<Action> {
        vec![ActionBarIntent::remove(&props.id).into()]
    }
}

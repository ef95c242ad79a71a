use crate::action::Action;
use crate::binder::{Connected, WidgetBinding};
use crate::store::AppState;

use super::intent::DropdownIntent;

pub struct Dropdown;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropdownProps {
    pub id: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownView {
    pub opened: bool,
}

impl DropdownProps {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl WidgetBinding for Dropdown {
    type OwnProps = DropdownProps;
    type StateProps = DropdownView;

    fn select(state: &AppState, props: &Self::OwnProps) -> Self::StateProps {
        DropdownView {
            opened: state
                .dropdowns
                .find(&props.id)
                .is_some_and(|dropdown| dropdown.opened),
        }
    }

    fn mount_actions(props: &Self::OwnProps) -> Vec<Action> {
        vec![DropdownIntent::add(&props.id).into()]
    }

    fn unmount_actions(props: &Self::OwnProps) -> Vec<Action> {
        vec![DropdownIntent::remove(&props.id).into()]
    }
}

impl Connected<Dropdown> {
    pub fn toggle(&self) {
        self.dispatch(DropdownIntent::toggle(&self.props().id));
    }

    pub fn close(&self) {
        self.dispatch(DropdownIntent::close(&self.props().id));
    }
}

use crate::action::Action;
use crate::mvi::Intent;

use super::state::ActionOption;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionBarIntent {
    Add { id: String },
    Remove { id: String },
    /// Replace the bar's actions.
    AddActions { id: String, actions: Vec<ActionOption> },
}

impl ActionBarIntent {
    pub fn add(id: impl Into<String>) -> Self {
        Self::Add { id: id.into() }
    }

    pub fn remove(id: impl Into<String>) -> Self {
        Self::Remove { id: id.into() }
    }

    pub fn add_actions(id: impl Into<String>, actions: Vec<ActionOption>) -> Self {
        Self::AddActions {
            id: id.into(),
            actions,
        }
    }
}

impl Intent for ActionBarIntent {
    fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "ADD_ACTION_BAR",
            Self::Remove { .. } => "REMOVE_ACTION_BAR",
            Self::AddActions { .. } => "ADD_ACTIONS",
        }
    }

    fn from_action(action: &Action) -> Option<&Self> {
        Self::project(action)
    }
}

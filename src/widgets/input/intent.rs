use crate::action::Action;
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputIntent {
    Add {
        id: String,
        value: String,
        valid: bool,
        disabled: bool,
    },
    Remove {
        id: String,
    },
    Change {
        id: String,
        value: String,
        valid: bool,
    },
    SetDisabled {
        id: String,
        disabled: bool,
    },
}

impl InputIntent {
    pub fn add(id: impl Into<String>, value: impl Into<String>, valid: bool, disabled: bool) -> Self {
        Self::Add {
            id: id.into(),
            value: value.into(),
            valid,
            disabled,
        }
    }

    pub fn remove(id: impl Into<String>) -> Self {
        Self::Remove { id: id.into() }
    }

    pub fn change(id: impl Into<String>, value: impl Into<String>, valid: bool) -> Self {
        Self::Change {
            id: id.into(),
            value: value.into(),
            valid,
        }
    }

    pub fn set_disabled(id: impl Into<String>, disabled: bool) -> Self {
        Self::SetDisabled {
            id: id.into(),
            disabled,
        }
    }
}

impl Intent for InputIntent {
    fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "ADD_INPUT",
            Self::Remove { .. } => "REMOVE_INPUT",
            Self::Change { .. } => "CHANGE_INPUT_VALUE",
            Self::SetDisabled { .. } => "SET_DISABLED_INPUT",
        }
    }

    fn from_action(action: &Action) -> Option<&Self> {
        Self::project(action)
    }
}

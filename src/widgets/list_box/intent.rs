use crate::action::Action;
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListBoxIntent {
    Add {
        id: String,
        selected: Vec<String>,
        multi: bool,
    },
    Remove {
        id: String,
    },
    /// Appends `value` to a multi list box, replaces the selection otherwise.
    Select {
        id: String,
        value: String,
    },
    Unselect {
        id: String,
        value: String,
    },
    Clear {
        id: String,
    },
}

impl ListBoxIntent {
    pub fn add(id: impl Into<String>, selected: Vec<String>, multi: bool) -> Self {
        Self::Add {
            id: id.into(),
            selected,
            multi,
        }
    }

    pub fn remove(id: impl Into<String>) -> Self {
        Self::Remove { id: id.into() }
    }

    pub fn select(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Select {
            id: id.into(),
            value: value.into(),
        }
    }

    pub fn unselect(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Unselect {
            id: id.into(),
            value: value.into(),
        }
    }

    pub fn clear(id: impl Into<String>) -> Self {
        Self::Clear { id: id.into() }
    }
}

impl Intent for ListBoxIntent {
    fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "ADD_LIST_BOX",
            Self::Remove { .. } => "REMOVE_LIST_BOX",
            Self::Select { .. } => "SELECT_ITEM_LIST_BOX",
            Self::Unselect { .. } => "UNSELECT_ITEM_LIST_BOX",
            Self::Clear { .. } => "CLEAR_LIST_BOX",
        }
    }

    fn from_action(action: &Action) -> Option<&Self> {
        Self::project(action)
    }
}

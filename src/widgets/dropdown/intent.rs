use crate::action::Action;
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownIntent {
    /// Register closed.
    Add { id: String },
    Remove { id: String },
    Toggle { id: String },
    Close { id: String },
}

impl DropdownIntent {
    pub fn add(id: impl Into<String>) -> Self {
        Self::Add { id: id.into() }
    }

    pub fn remove(id: impl Into<String>) -> Self {
        Self::Remove { id: id.into() }
    }

    pub fn toggle(id: impl Into<String>) -> Self {
        Self::Toggle { id: id.into() }
    }

    pub fn close(id: impl Into<String>) -> Self {
        Self::Close { id: id.into() }
    }
}

impl Intent for DropdownIntent {
    fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "ADD_DROPDOWN",
            Self::Remove { .. } => "REMOVE_DROPDOWN",
            Self::Toggle { .. } => "TOGGLE_DROPDOWN",
            Self::Close { .. } => "CLOSE_DROPDOWN",
        }
    }

    fn from_action(action: &Action) -> Option<&Self> {
        Self::project(action)
    }
}

use crate::action::Action;
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterIntent {
    /// Register with an empty filter text.
    Add { id: String },
    Remove { id: String },
    Change { id: String, filter_text: String },
}

impl FilterIntent {
    pub fn add(id: impl Into<String>) -> Self {
        Self::Add { id: id.into() }
    }

    pub fn remove(id: impl Into<String>) -> Self {
        Self::Remove { id: id.into() }
    }

    pub fn change(id: impl Into<String>, filter_text: impl Into<String>) -> Self {
        Self::Change {
            id: id.into(),
            filter_text: filter_text.into(),
        }
    }
}

impl Intent for FilterIntent {
    fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "ADD_FILTER",
            Self::Remove { .. } => "REMOVE_FILTER",
            Self::Change { .. } => "FILTER_THROUGH_ITEMS",
        }
    }

    fn from_action(action: &Action) -> Option<&Self> {
        Self::project(action)
    }
}

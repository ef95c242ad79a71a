use crate::action::Action;
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PerPageIntent {
    Add { id: String, per_page: u32 },
    Remove { id: String },
    Change { id: String, per_page: u32 },
}

impl PerPageIntent {
    pub fn add(id: impl Into<String>, per_page: u32) -> Self {
        Self::Add {
            id: id.into(),
            per_page,
        }
    }

    pub fn remove(id: impl Into<String>) -> Self {
        Self::Remove { id: id.into() }
    }

    pub fn change(id: impl Into<String>, per_page: u32) -> Self {
        Self::Change {
            id: id.into(),
            per_page,
        }
    }
}

impl Intent for PerPageIntent {
    fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "ADD_PER_PAGE",
            Self::Remove { .. } => "REMOVE_PER_PAGE",
            Self::Change { .. } => "CHANGE_PER_PAGE",
        }
    }

    fn from_action(action: &Action) -> Option<&Self> {
        Self::project(action)
    }
}

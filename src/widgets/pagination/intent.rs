use crate::action::Action;
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaginationIntent {
    /// Register a pagination on page 0.
    Add { id: String },
    Remove { id: String },
    ChangePage { id: String, page_nb: u32 },
    /// Back to page 0.
    Reset { id: String },
}

impl PaginationIntent {
    pub fn add(id: impl Into<String>) -> Self {
        Self::Add { id: id.into() }
    }

    pub fn remove(id: impl Into<String>) -> Self {
        Self::Remove { id: id.into() }
    }

    pub fn change_page(id: impl Into<String>, page_nb: u32) -> Self {
        Self::ChangePage {
            id: id.into(),
            page_nb,
        }
    }

    pub fn reset(id: impl Into<String>) -> Self {
        Self::Reset { id: id.into() }
    }
}

impl Intent for PaginationIntent {
    fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "ADD_PAGINATION",
            Self::Remove { .. } => "REMOVE_PAGINATION",
            Self::ChangePage { .. } => "CHANGE_PAGE",
            Self::Reset { .. } => "RESET_PAGING",
        }
    }

    fn from_action(action: &Action) -> Option<&Self> {
        Self::project(action)
    }
}

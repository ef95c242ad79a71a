use crate::action::Action;
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableHeaderIntent {
    /// `is_default` registers the column as the table's initial ascending sort.
    Add {
        id: String,
        table_id: String,
        is_default: bool,
    },
    Remove {
        id: String,
    },
    /// Flip this column's direction and unsort the table's other columns.
    Sort {
        id: String,
    },
}

impl TableHeaderIntent {
    pub fn add(id: impl Into<String>, table_id: impl Into<String>, is_default: bool) -> Self {
        Self::Add {
            id: id.into(),
            table_id: table_id.into(),
            is_default,
        }
    }

    pub fn remove(id: impl Into<String>) -> Self {
        Self::Remove { id: id.into() }
    }

    pub fn sort(id: impl Into<String>) -> Self {
        Self::Sort { id: id.into() }
    }
}

impl Intent for TableHeaderIntent {
    fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "TABLE_HEADER_ADD",
            Self::Remove { .. } => "TABLE_HEADER_REMOVE",
            Self::Sort { .. } => "TABLE_HEADER_SORT",
        }
    }

    fn from_action(action: &Action) -> Option<&Self> {
        Self::project(action)
    }
}

use crate::action::Action;
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRowIntent {
    Add { id: String, table_id: String },
    Remove { id: String },
    /// Single selection selects this row and deselects the other rows of the
    /// same table; multi selection toggles this row only.
    Select { id: String, is_multi: bool },
    DeselectAll { table_id: String },
    /// `Some(opened)` forces the state, `None` flips it.
    ToggleCollapsible { id: String, opened: Option<bool> },
}

impl TableRowIntent {
    pub fn add(id: impl Into<String>, table_id: impl Into<String>) -> Self {
        Self::Add {
            id: id.into(),
            table_id: table_id.into(),
        }
    }

    pub fn remove(id: impl Into<String>) -> Self {
        Self::Remove { id: id.into() }
    }

    pub fn select(id: impl Into<String>, is_multi: bool) -> Self {
        Self::Select {
            id: id.into(),
            is_multi,
        }
    }

    pub fn deselect_all(table_id: impl Into<String>) -> Self {
        Self::DeselectAll {
            table_id: table_id.into(),
        }
    }

    pub fn toggle_collapsible(id: impl Into<String>, opened: Option<bool>) -> Self {
        Self::ToggleCollapsible {
            id: id.into(),
            opened,
        }
    }
}

impl Intent for TableRowIntent {
    fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "TABLE_ROW_ADD",
            Self::Remove { .. } => "TABLE_ROW_REMOVE",
            Self::Select { .. } => "TABLE_ROW_SELECT",
            Self::DeselectAll { .. } => "TABLE_ROW_DESELECT_ALL",
            Self::ToggleCollapsible { .. } => "TABLE_ROW_TOGGLE_COLLAPSIBLE",
        }
    }

    fn from_action(action: &Action) -> Option<&Self> {
        Self::project(action)
    }
}

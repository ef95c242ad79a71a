use serde::Serialize;

use crate::slice::{SliceCollection, SliceRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRowState {
    pub id: String,
    pub table_id: String,
    pub selected: bool,
    /// Collapsible detail row expanded.
    pub opened: bool,
}

impl SliceRecord for TableRowState {
    fn id(&self) -> &str {
        &self.id
    }
}

pub type TableRowSlice = SliceCollection<TableRowState>;

impl TableRowSlice {
    /// Ids of the selected rows of `table_id`, in registration order.
    pub fn selected_in<'a>(&'a self, table_id: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.iter()
            .filter(move |row| row.table_id == table_id && row.selected)
            .map(|row| row.id.as_str())
    }
}

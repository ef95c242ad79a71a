use serde::Serialize;

use crate::slice::{SliceCollection, SliceRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableHeaderState {
    pub id: String,
    pub table_id: String,
    /// `None` while the column is not the table's sort column.
    pub is_asc: Option<bool>,
}

impl SliceRecord for TableHeaderState {
    fn id(&self) -> &str {
        &self.id
    }
}

pub type TableHeaderSlice = SliceCollection<TableHeaderState>;

impl TableHeaderSlice {
    /// The column `table_id` is sorted by, with its direction.
    pub fn sorted_column(&self, table_id: &str) -> Option<(&str, bool)> {
        self.iter()
            .filter(|header| header.table_id == table_id)
            .find_map(|header| header.is_asc.map(|is_asc| (header.id.as_str(), is_asc)))
    }
}

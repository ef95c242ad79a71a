use serde::Serialize;

use crate::slice::{SliceCollection, SliceRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListBoxState {
    pub id: String,
    /// Selected values, in selection order.
    pub selected: Vec<String>,
    pub multi: bool,
}

impl SliceRecord for ListBoxState {
    fn id(&self) -> &str {
        &self.id
    }
}

pub type ListBoxSlice = SliceCollection<ListBoxState>;

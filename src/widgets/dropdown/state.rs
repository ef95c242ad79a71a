use serde::Serialize;

use crate::slice::{SliceCollection, SliceRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DropdownState {
    pub id: String,
    pub opened: bool,
}

impl SliceRecord for DropdownState {
    fn id(&self) -> &str {
        &self.id
    }
}

pub type DropdownSlice = SliceCollection<DropdownState>;

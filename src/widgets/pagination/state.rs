use serde::Serialize;

use crate::slice::{SliceCollection, SliceRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    pub id: String,
    /// Zero-based page index. Not bounds-checked.
    pub page_nb: u32,
}

impl SliceRecord for PaginationState {
    fn id(&self) -> &str {
        &self.id
    }
}

pub type PaginationSlice = SliceCollection<PaginationState>;

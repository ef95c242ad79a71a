use serde::Serialize;

use crate::slice::{SliceCollection, SliceRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub id: String,
    pub filter_text: String,
}

impl SliceRecord for FilterState {
    fn id(&self) -> &str {
        &self.id
    }
}

pub type FilterSlice = SliceCollection<FilterState>;

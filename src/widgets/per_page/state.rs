use serde::Serialize;

use crate::slice::{SliceCollection, SliceRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PerPageState {
    pub id: String,
    pub per_page: u32,
}

impl SliceRecord for PerPageState {
    fn id(&self) -> &str {
        &self.id
    }
}

pub type PerPageSlice = SliceCollection<PerPageState>;

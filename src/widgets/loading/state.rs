use serde::Serialize;

use crate::slice::{SliceCollection, SliceRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadingState {
    pub id: String,
    pub is_on: bool,
}

impl SliceRecord for LoadingState {
    fn id(&self) -> &str {
        &self.id
    }
}

pub type LoadingSlice = SliceCollection<LoadingState>;

use serde::Serialize;

use crate::slice::{SliceCollection, SliceRecord};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputState {
    pub id: String,
    pub value: String,
    pub valid: bool,
    pub disabled: bool,
}

impl SliceRecord for InputState {
    fn id(&self) -> &str {
        &self.id
    }
}

pub type InputSlice = SliceCollection<InputState>;

use serde::Serialize;

use crate::slice::{SliceCollection, SliceRecord};

/// One entry of an action bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionOption {
    pub name: String,
    pub enabled: bool,
    pub primary: bool,
    pub separator: bool,
    pub link: Option<String>,
    /// Triggered when the owning row is double-clicked.
    pub call_on_double_click: bool,
}

impl ActionOption {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            primary: false,
            separator: false,
            link: None,
            call_on_double_click: false,
        }
    }

    pub fn primary(mut self) -> Self {
        self.primary = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn on_double_click(mut self) -> Self {
        self.call_on_double_click = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionBarState {
    pub id: String,
    pub actions: Vec<ActionOption>,
}

impl SliceRecord for ActionBarState {
    fn id(&self) -> &str {
        &self.id
    }
}

pub type ActionBarSlice = SliceCollection<ActionBarState>;

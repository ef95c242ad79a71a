use crate::action::Action;
use crate::mvi::Intent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadingIntent {
    Add { id: String, is_on: bool },
    Remove { id: String },
    /// Switch on every listed indicator; unknown ids are skipped.
    TurnOn { ids: Vec<String> },
    TurnOff { ids: Vec<String> },
}

impl LoadingIntent {
    pub fn add(id: impl Into<String>, is_on: bool) -> Self {
        Self::Add {
            id: id.into(),
            is_on,
        }
    }

    pub fn remove(id: impl Into<String>) -> Self {
        Self::Remove { id: id.into() }
    }

    pub fn turn_on(ids: Vec<String>) -> Self {
        Self::TurnOn { ids }
    }

    pub fn turn_off(ids: Vec<String>) -> Self {
        Self::TurnOff { ids }
    }
}

impl Intent for LoadingIntent {
    fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "ADD_LOADING",
            Self::Remove { .. } => "REMOVE_LOADING",
            Self::TurnOn { .. } => "TURN_ON_LOADING",
            Self::TurnOff { .. } => "TURN_OFF_LOADING",
        }
    }

    fn from_action(action: &Action) -> Option<&Self> {
        Self::project(action)
    }
}

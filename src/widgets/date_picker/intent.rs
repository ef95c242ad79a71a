use time::Date;

use crate::action::Action;
use crate::mvi::Intent;

use super::state::DateLimit;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatePickerIntent {
    /// Register with both limits, edited and applied, set to `date`.
    Add {
        id: String,
        calendar_id: String,
        color: String,
        is_range: bool,
        date: Date,
    },
    Remove {
        id: String,
    },
    /// Start picking `limit`, or stop with `None`. Only one picker of a
    /// calendar picks at a time.
    Select {
        id: String,
        limit: Option<DateLimit>,
    },
    ChangeLowerLimit {
        id: String,
        date: Date,
    },
    ChangeUpperLimit {
        id: String,
        date: Date,
    },
    /// Commit the edited limits of every picker of the calendar.
    Apply {
        calendar_id: String,
    },
    /// Restore the applied limits of every picker of the calendar.
    Reset {
        calendar_id: String,
    },
}

impl DatePickerIntent {
    pub fn add(
        id: impl Into<String>,
        calendar_id: impl Into<String>,
        color: impl Into<String>,
        is_range: bool,
        date: Date,
    ) -> Self {
        Self::Add {
            id: id.into(),
            calendar_id: calendar_id.into(),
            color: color.into(),
            is_range,
            date,
        }
    }

    pub fn remove(id: impl Into<String>) -> Self {
        Self::Remove { id: id.into() }
    }

    pub fn select(id: impl Into<String>, limit: Option<DateLimit>) -> Self {
        Self::Select { id: id.into(), limit }
    }

    pub fn change_lower_limit(id: impl Into<String>, date: Date) -> Self {
        Self::ChangeLowerLimit { id: id.into(), date }
    }

    pub fn change_upper_limit(id: impl Into<String>, date: Date) -> Self {
        Self::ChangeUpperLimit { id: id.into(), date }
    }

    pub fn apply(calendar_id: impl Into<String>) -> Self {
        Self::Apply {
            calendar_id: calendar_id.into(),
        }
    }

    pub fn reset(calendar_id: impl Into<String>) -> Self {
        Self::Reset {
            calendar_id: calendar_id.into(),
        }
    }
}

impl Intent for DatePickerIntent {
    fn kind(&self) -> &'static str {
        match self {
            Self::Add { .. } => "ADD_DATE_PICKER",
            Self::Remove { .. } => "REMOVE_DATE_PICKER",
            Self::Select { .. } => "SELECT_DATE",
            Self::ChangeLowerLimit { .. } => "CHANGE_LOWER_LIMIT",
            Self::ChangeUpperLimit { .. } => "CHANGE_UPPER_LIMIT",
            Self::Apply { .. } => "APPLY_DATE_PICKER",
            Self::Reset { .. } => "RESET_DATE_PICKERS",
        }
    }

    fn from_action(action: &Action) -> Option<&Self> {
        Self::project(action)
    }
}

use serde::Serialize;
use time::Date;

use crate::slice::{SliceCollection, SliceRecord};

/// Limit a calendar click will set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DateLimit {
    Lower,
    Upper,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatePickerState {
    pub id: String,
    pub calendar_id: String,
    /// Color of the selected days in the calendar.
    pub color: String,
    pub is_range: bool,
    pub lower_limit: Date,
    pub upper_limit: Date,
    /// `Some` while the user picks that limit in the calendar.
    pub selected: Option<DateLimit>,
    pub applied_lower_limit: Date,
    pub applied_upper_limit: Date,
}

impl DatePickerState {
    pub fn contains(&self, date: Date) -> bool {
        self.lower_limit <= date && date <= self.upper_limit
    }

    pub fn is_lower_limit(&self, date: Date) -> bool {
        self.is_range && date == self.lower_limit
    }

    pub fn is_upper_limit(&self, date: Date) -> bool {
        self.is_range && date == self.upper_limit
    }
}

impl SliceRecord for DatePickerState {
    fn id(&self) -> &str {
        &self.id
    }
}

pub type DatePickerSlice = SliceCollection<DatePickerState>;

impl DatePickerSlice {
    /// Pickers of `calendar_id`, in registration order.
    pub fn in_calendar<'a>(&'a self, calendar_id: &'a str) -> impl Iterator<Item = &'a DatePickerState> + 'a {
        self.iter().filter(move |picker| picker.calendar_id == calendar_id)
    }

    /// The picker of `calendar_id` whose limit is being picked.
    pub fn selecting<'a>(&'a self, calendar_id: &'a str) -> Option<&'a DatePickerState> {
        self.in_calendar(calendar_id).find(|picker| picker.selected.is_some())
    }
}

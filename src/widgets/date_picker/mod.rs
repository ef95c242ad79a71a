//! Date pickers and the calendars grouping them.
//!
//! Each picker holds the limits being edited and the limits last applied.
//! Pickers sharing a `calendar_id` are shown, applied and reset together.

mod binding;
mod intent;
mod reducer;
mod state;

pub use binding::{Calendar, CalendarProps, CalendarView, DatePicker, DatePickerProps, DatePickerView, DayInfo};
pub use intent::DatePickerIntent;
pub use reducer::DatePickerReducer;
pub use state::{DateLimit, DatePickerSlice, DatePickerState};

use time::Date;

use crate::action::Action;
use crate::binder::{Connected, WidgetBinding};
use crate::store::AppState;

use super::intent::DatePickerIntent;
use super::state::{DateLimit, DatePickerState};

/// Date (or date range) input shown in a calendar.
pub struct DatePicker;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatePickerProps {
    pub id: String,
    pub calendar_id: String,
    pub color: String,
    pub is_range: bool,
    /// Both limits on mount.
    pub initial_date: Date,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatePickerView {
    /// `(lower, upper)`, `None` while unregistered.
    pub limits: Option<(Date, Date)>,
    pub selected: Option<DateLimit>,
}

impl DatePickerProps {
    pub fn new(id: impl Into<String>, calendar_id: impl Into<String>, initial_date: Date) -> Self {
        Self {
            id: id.into(),
            calendar_id: calendar_id.into(),
            color: String::new(),
            is_range: false,
            initial_date,
        }
    }

    pub fn range(mut self) -> Self {
        self.is_range = true;
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }
}

impl WidgetBinding for DatePicker {
    type OwnProps = DatePickerProps;
    type StateProps = DatePickerView;

    fn select(state: &AppState, props: &Self::OwnProps) -> Self::StateProps {
        state
            .date_pickers
            .find(&props.id)
            .map(|picker| DatePickerView {
                limits: Some((picker.lower_limit, picker.upper_limit)),
                selected: picker.selected,
            })
            .unwrap_or_default()
    }

    fn mount_actions(props: &Self::OwnProps) -> Vec<Action> {
        vec![DatePickerIntent::add(
            &props.id,
            &props.calendar_id,
            &props.color,
            props.is_range,
            props.initial_date,
        )
        .into()]
    }

    fn unmount_actions(props: &Self::OwnProps) -> Vec<Action> {
        vec![DatePickerIntent::remove(&props.id).into()]
    }
}

impl Connected<DatePicker> {
    /// Input focused: the next calendar click sets `limit`.
    pub fn pick(&self, limit: DateLimit) {
        self.dispatch(DatePickerIntent::select(&self.props().id, Some(limit)));
    }

    /// Limit typed into the input.
    pub fn change(&self, limit: DateLimit, date: Date) {
        let id = &self.props().id;
        self.dispatch(match limit {
            DateLimit::Lower => DatePickerIntent::change_lower_limit(id, date),
            DateLimit::Upper => DatePickerIntent::change_upper_limit(id, date),
        });
    }
}

/// How a calendar renders one day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayInfo {
    pub is_selected: bool,
    pub is_lower_limit: bool,
    pub is_upper_limit: bool,
    pub color: Option<String>,
}

/// Month view showing and editing the pickers sharing its id as `calendar_id`.
///
/// The pickers register themselves; the calendar only reads them.
pub struct Calendar;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarProps {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarView {
    /// The calendar's pickers, in registration order.
    pub selection: Vec<DatePickerState>,
}

impl CalendarProps {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl WidgetBinding for Calendar {
    type OwnProps = CalendarProps;
    type StateProps = CalendarView;

    fn select(state: &AppState, props: &Self::OwnProps) -> Self::StateProps {
        CalendarView {
            selection: state.date_pickers.in_calendar(&props.id).cloned().collect(),
        }
    }

    fn mount_actions(_props: &Self::OwnProps) -> Vec<Action> {
        Vec::new()
    }

    fn unmount_actions(_props: &Self::OwnProps) -> Vec<Action> {
        Vec::new()
    }
}

impl Connected<Calendar> {
    /// Day clicked: set the limit being picked.
    ///
    /// Picking the lower limit of a range moves on to its upper limit; any
    /// other pick ends. Clicks with no picker picking are ignored.
    pub fn click(&self, date: Date) {
        let Some(picker) = self.view().selection.iter().find(|picker| picker.selected.is_some()) else {
            return;
        };

        let mut actions = Vec::with_capacity(2);
        match picker.selected {
            Some(DateLimit::Lower) => {
                actions.push(Action::from(DatePickerIntent::change_lower_limit(&picker.id, date)));
                let next = picker.is_range.then_some(DateLimit::Upper);
                actions.push(DatePickerIntent::select(&picker.id, next).into());
            }
            Some(DateLimit::Upper) => {
                actions.push(Action::from(DatePickerIntent::change_upper_limit(&picker.id, date)));
                actions.push(DatePickerIntent::select(&picker.id, None).into());
            }
            None => {}
        }
        self.dispatch_all(actions);
    }

    /// Rendering of `date`. The last picker covering it gives the color.
    pub fn day_info(&self, date: Date) -> DayInfo {
        self.view()
            .selection
            .iter()
            .filter(|picker| picker.contains(date))
            .fold(DayInfo::default(), |_, picker| DayInfo {
                is_selected: true,
                is_lower_limit: picker.is_lower_limit(date),
                is_upper_limit: picker.is_upper_limit(date),
                color: Some(picker.color.clone()),
            })
    }

    pub fn apply(&self) {
        self.dispatch(DatePickerIntent::apply(&self.props().id));
    }

    pub fn reset(&self) {
        self.dispatch(DatePickerIntent::reset(&self.props().id));
    }
}

use time::Date;

use crate::mvi::Reducer;

use super::intent::DatePickerIntent;
use super::state::{DateLimit, DatePickerSlice, DatePickerState};

pub struct DatePickerReducer;

impl Reducer for DatePickerReducer {
    type State = DatePickerSlice;
    type Intent = DatePickerIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DatePickerIntent::Add {
                id,
                calendar_id,
                color,
                is_range,
                date,
            } => state.insert(DatePickerState {
                id,
                calendar_id,
                color,
                is_range,
                lower_limit: date,
                upper_limit: date,
                selected: None,
                applied_lower_limit: date,
                applied_upper_limit: date,
            }),
            DatePickerIntent::Remove { id } => state.remove(&id),
            DatePickerIntent::Select { id, limit: None } => state.update(&id, |picker| DatePickerState {
                selected: None,
                ..picker.clone()
            }),
            DatePickerIntent::Select { id, limit } => {
                let Some(calendar_id) = state.find(&id).map(|picker| picker.calendar_id.clone()) else {
                    return state;
                };
                state.update_where(|picker| {
                    if picker.id == id {
                        Some(DatePickerState {
                            selected: limit,
                            ..picker.clone()
                        })
                    } else if picker.calendar_id == calendar_id {
                        Some(DatePickerState {
                            selected: None,
                            ..picker.clone()
                        })
                    } else {
                        None
                    }
                })
            }
            DatePickerIntent::ChangeLowerLimit { id, date } => {
                state.update(&id, |picker| with_limit(picker, DateLimit::Lower, date))
            }
            DatePickerIntent::ChangeUpperLimit { id, date } => {
                state.update(&id, |picker| with_limit(picker, DateLimit::Upper, date))
            }
            DatePickerIntent::Apply { calendar_id } => state.update_where(|picker| {
                (picker.calendar_id == calendar_id).then(|| DatePickerState {
                    applied_lower_limit: picker.lower_limit,
                    applied_upper_limit: picker.upper_limit,
                    selected: None,
                    ..picker.clone()
                })
            }),
            DatePickerIntent::Reset { calendar_id } => state.update_where(|picker| {
                (picker.calendar_id == calendar_id).then(|| DatePickerState {
                    lower_limit: picker.applied_lower_limit,
                    upper_limit: picker.applied_upper_limit,
                    selected: None,
                    ..picker.clone()
                })
            }),
        }
    }
}

/// Move one limit to `date`, keeping `lower <= upper`.
///
/// Single-date pickers move both limits.
fn with_limit(picker: &DatePickerState, limit: DateLimit, date: Date) -> DatePickerState {
    let (lower_limit, upper_limit) = match limit {
        _ if !picker.is_range => (date, date),
        DateLimit::Lower => (date, picker.upper_limit.max(date)),
        DateLimit::Upper => (picker.lower_limit.min(date), date),
    };
    DatePickerState {
        lower_limit,
        upper_limit,
        ..picker.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn calendar() -> DatePickerSlice {
        [
            DatePickerIntent::add("from-to", "cal", "blue", true, date!(2024 - 03 - 10)),
            DatePickerIntent::add("compare", "cal", "green", true, date!(2024 - 03 - 10)),
            DatePickerIntent::add("other", "elsewhere", "red", false, date!(2024 - 03 - 10)),
        ]
        .into_iter()
        .fold(DatePickerSlice::default(), DatePickerReducer::reduce)
    }

    fn limits(state: &DatePickerSlice, id: &str) -> (Date, Date) {
        let picker = state.find(id).unwrap();
        (picker.lower_limit, picker.upper_limit)
    }

    #[test]
    fn add_sets_every_limit_to_the_date() {
        let picker = calendar().find("from-to").cloned().unwrap();
        assert_eq!(picker.lower_limit, date!(2024 - 03 - 10));
        assert_eq!(picker.upper_limit, date!(2024 - 03 - 10));
        assert_eq!(picker.applied_lower_limit, date!(2024 - 03 - 10));
        assert_eq!(picker.applied_upper_limit, date!(2024 - 03 - 10));
        assert_eq!(picker.selected, None);
    }

    #[test]
    fn select_is_exclusive_within_a_calendar() {
        let state = DatePickerReducer::reduce(calendar(), DatePickerIntent::select("other", Some(DateLimit::Lower)));
        let state = DatePickerReducer::reduce(state, DatePickerIntent::select("from-to", Some(DateLimit::Lower)));
        let state = DatePickerReducer::reduce(state, DatePickerIntent::select("compare", Some(DateLimit::Upper)));

        assert_eq!(state.find("from-to").unwrap().selected, None);
        assert_eq!(state.find("compare").unwrap().selected, Some(DateLimit::Upper));
        assert_eq!(state.find("other").unwrap().selected, Some(DateLimit::Lower));
        assert_eq!(state.selecting("cal").map(|p| p.id.as_str()), Some("compare"));
    }

    #[test]
    fn range_limits_stay_ordered() {
        let state = DatePickerReducer::reduce(
            calendar(),
            DatePickerIntent::change_upper_limit("from-to", date!(2024 - 03 - 20)),
        );
        assert_eq!(limits(&state, "from-to"), (date!(2024 - 03 - 10), date!(2024 - 03 - 20)));

        let state = DatePickerReducer::reduce(
            state,
            DatePickerIntent::change_lower_limit("from-to", date!(2024 - 03 - 25)),
        );
        assert_eq!(limits(&state, "from-to"), (date!(2024 - 03 - 25), date!(2024 - 03 - 25)));

        let state = DatePickerReducer::reduce(
            state,
            DatePickerIntent::change_upper_limit("from-to", date!(2024 - 03 - 01)),
        );
        assert_eq!(limits(&state, "from-to"), (date!(2024 - 03 - 01), date!(2024 - 03 - 01)));
    }

    #[test]
    fn single_date_picker_moves_both_limits() {
        let state = DatePickerReducer::reduce(
            calendar(),
            DatePickerIntent::change_upper_limit("other", date!(2024 - 04 - 01)),
        );
        assert_eq!(limits(&state, "other"), (date!(2024 - 04 - 01), date!(2024 - 04 - 01)));
    }

    #[test]
    fn apply_and_reset_touch_only_their_calendar() {
        let state = [
            DatePickerIntent::change_upper_limit("from-to", date!(2024 - 03 - 20)),
            DatePickerIntent::change_upper_limit("compare", date!(2024 - 03 - 15)),
            DatePickerIntent::change_upper_limit("other", date!(2024 - 03 - 30)),
            DatePickerIntent::apply("cal"),
            DatePickerIntent::change_upper_limit("from-to", date!(2024 - 03 - 28)),
            DatePickerIntent::select("from-to", Some(DateLimit::Upper)),
            DatePickerIntent::reset("cal"),
        ]
        .into_iter()
        .fold(calendar(), DatePickerReducer::reduce);

        let from_to = state.find("from-to").unwrap();
        assert_eq!(from_to.applied_upper_limit, date!(2024 - 03 - 20));
        assert_eq!(from_to.upper_limit, date!(2024 - 03 - 20));
        assert_eq!(from_to.selected, None);
        assert_eq!(state.find("compare").unwrap().applied_upper_limit, date!(2024 - 03 - 15));

        let other = state.find("other").unwrap();
        assert_eq!(other.upper_limit, date!(2024 - 03 - 30));
        assert_eq!(other.applied_upper_limit, date!(2024 - 03 - 10));
    }

    #[test]
    fn apply_without_edits_keeps_reference() {
        let before = calendar();
        let after = DatePickerReducer::reduce(before.clone(), DatePickerIntent::apply("cal"));
        assert!(after.ptr_eq(&before));
    }

    #[test]
    fn in_calendar_filters_by_calendar_id() {
        let state = calendar();
        let ids: Vec<_> = state.in_calendar("cal").map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["from-to", "compare"]);
        assert!(state.in_calendar("missing").next().is_none());
    }
}

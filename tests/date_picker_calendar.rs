mod common;

use common::{kinds, make_recording_store, make_store};
use time::macros::date;
use uislice::binder::Connected;
use uislice::widgets::date_picker::{
    Calendar, CalendarProps, DateLimit, DatePicker, DatePickerProps, DatePickerView, DayInfo,
};

fn range_picker(id: &str, color: &str) -> DatePickerProps {
    DatePickerProps::new(id, "report", date!(2024 - 03 - 10))
        .range()
        .with_color(color)
}

/// Test mounting registers the picker and dropping it unregisters.
#[test]
fn test_date_picker_mount_and_drop() {
    let (store, log) = make_recording_store();
    let picker = Connected::<DatePicker>::mount(&store, range_picker("from-to", "blue"));

    assert_eq!(
        *picker.view(),
        DatePickerView {
            limits: Some((date!(2024 - 03 - 10), date!(2024 - 03 - 10))),
            selected: None,
        }
    );

    drop(picker);
    assert!(store.state().date_pickers.is_empty());
    assert_eq!(kinds(&log), vec!["ADD_DATE_PICKER", "REMOVE_DATE_PICKER"]);
}

/// Test two clicks set both limits of a range picker.
#[test]
fn test_calendar_click_sets_range() {
    let (store, log) = make_recording_store();
    let mut picker = Connected::<DatePicker>::mount(&store, range_picker("from-to", "blue"));
    let mut calendar = Connected::<Calendar>::mount(&store, CalendarProps::new("report"));

    // Clicks with nothing being picked are ignored.
    calendar.click(date!(2024 - 03 - 01));
    assert_eq!(kinds(&log), vec!["ADD_DATE_PICKER"]);

    picker.pick(DateLimit::Lower);
    assert!(calendar.refresh());
    calendar.click(date!(2024 - 03 - 05));

    assert!(picker.refresh());
    assert_eq!(picker.view().selected, Some(DateLimit::Upper));
    assert!(calendar.refresh());
    calendar.click(date!(2024 - 03 - 12));

    assert!(picker.refresh());
    assert_eq!(
        *picker.view(),
        DatePickerView {
            limits: Some((date!(2024 - 03 - 05), date!(2024 - 03 - 12))),
            selected: None,
        }
    );
    assert_eq!(
        kinds(&log)[1..],
        [
            "SELECT_DATE",
            "CHANGE_LOWER_LIMIT",
            "SELECT_DATE",
            "CHANGE_UPPER_LIMIT",
            "SELECT_DATE"
        ]
    );
}

/// Test a single-date picker stops after one click.
#[test]
fn test_calendar_click_single_date() {
    let store = make_store();
    let mut picker = Connected::<DatePicker>::mount(
        &store,
        DatePickerProps::new("due", "report", date!(2024 - 03 - 10)),
    );
    let mut calendar = Connected::<Calendar>::mount(&store, CalendarProps::new("report"));

    picker.pick(DateLimit::Lower);
    calendar.refresh();
    calendar.click(date!(2024 - 04 - 02));

    picker.refresh();
    assert_eq!(
        *picker.view(),
        DatePickerView {
            limits: Some((date!(2024 - 04 - 02), date!(2024 - 04 - 02))),
            selected: None,
        }
    );
}

/// Test a calendar only sees the pickers of its own id.
#[test]
fn test_calendar_groups_by_calendar_id() {
    let store = make_store();
    let _from_to = Connected::<DatePicker>::mount(&store, range_picker("from-to", "blue"));
    let _compare = Connected::<DatePicker>::mount(&store, range_picker("compare", "green"));
    let _other = Connected::<DatePicker>::mount(
        &store,
        DatePickerProps::new("other", "audit", date!(2024 - 03 - 10)),
    );
    let calendar = Connected::<Calendar>::mount(&store, CalendarProps::new("report"));

    let ids: Vec<_> = calendar.view().selection.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["from-to", "compare"]);
}

/// Test typed limits render in the calendar, the last covering picker winning.
#[test]
fn test_calendar_day_info() {
    let store = make_store();
    let from_to = Connected::<DatePicker>::mount(&store, range_picker("from-to", "blue"));
    let compare = Connected::<DatePicker>::mount(&store, range_picker("compare", "green"));
    let mut calendar = Connected::<Calendar>::mount(&store, CalendarProps::new("report"));

    from_to.change(DateLimit::Upper, date!(2024 - 03 - 20));
    compare.change(DateLimit::Lower, date!(2024 - 03 - 15));
    compare.change(DateLimit::Upper, date!(2024 - 03 - 25));
    assert!(calendar.refresh());

    assert_eq!(
        calendar.day_info(date!(2024 - 03 - 10)),
        DayInfo {
            is_selected: true,
            is_lower_limit: true,
            is_upper_limit: false,
            color: Some("blue".to_string()),
        }
    );
    assert_eq!(
        calendar.day_info(date!(2024 - 03 - 18)),
        DayInfo {
            is_selected: true,
            is_lower_limit: false,
            is_upper_limit: false,
            color: Some("green".to_string()),
        }
    );
    assert!(calendar.day_info(date!(2024 - 03 - 25)).is_upper_limit);
    assert_eq!(calendar.day_info(date!(2024 - 04 - 01)), DayInfo::default());
}

/// Test reset drops unapplied edits and apply makes them stick.
#[test]
fn test_calendar_apply_and_reset() {
    let store = make_store();
    let mut picker = Connected::<DatePicker>::mount(&store, range_picker("from-to", "blue"));
    let calendar = Connected::<Calendar>::mount(&store, CalendarProps::new("report"));

    picker.change(DateLimit::Upper, date!(2024 - 03 - 20));
    calendar.reset();
    picker.refresh();
    assert_eq!(
        picker.view().limits,
        Some((date!(2024 - 03 - 10), date!(2024 - 03 - 10)))
    );

    picker.change(DateLimit::Upper, date!(2024 - 03 - 20));
    calendar.apply();
    picker.change(DateLimit::Lower, date!(2024 - 03 - 01));
    picker.pick(DateLimit::Upper);
    calendar.reset();

    picker.refresh();
    assert_eq!(
        *picker.view(),
        DatePickerView {
            limits: Some((date!(2024 - 03 - 10), date!(2024 - 03 - 20))),
            selected: None,
        }
    );
}

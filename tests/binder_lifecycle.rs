mod common;

use std::cell::RefCell;
use std::rc::Rc;

use common::{kinds, make_recording_store, make_store};
use uislice::binder::{Connected, LifecycleHooks};
use uislice::widgets::action_bar::{ActionBar, ActionBarProps, ActionOption};
use uislice::widgets::dropdown::{Dropdown, DropdownIntent, DropdownProps, DropdownView};
use uislice::widgets::pagination::{NavigationPagination, NavigationPaginationProps, PaginationIntent};
use uislice::widgets::table_row::{TableRow, TableRowProps};

/// Test that mount registers and drop unregisters the widget.
#[test]
fn test_mount_then_drop_round_trip() {
    let (store, log) = make_recording_store();

    {
        let _pagination =
            Connected::<NavigationPagination>::mount(&store, NavigationPaginationProps::new("p1", 5));
        assert!(store.state().paginations.contains("p1"));
    }

    assert!(!store.state().paginations.contains("p1"));
    assert_eq!(kinds(&log), vec!["ADD_PAGINATION", "REMOVE_PAGINATION"]);
}

/// Test that unmounting a widget whose record is already gone is harmless.
#[test]
fn test_unmount_after_clear_state() {
    let (store, log) = make_recording_store();
    let pagination =
        Connected::<NavigationPagination>::mount(&store, NavigationPaginationProps::new("p1", 5));

    store.clear_state();
    let before = store.state();
    pagination.unmount();

    assert_eq!(kinds(&log), vec!["ADD_PAGINATION", "CLEAR_STATE", "REMOVE_PAGINATION"]);
    assert!(store.state().paginations.ptr_eq(&before.paginations));
}

/// Test that the hooks fire at render, change and destroy.
#[test]
fn test_lifecycle_hooks() {
    let store = make_store();
    let events: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));

    let rendered = Rc::clone(&events);
    let changed = Rc::clone(&events);
    let destroyed = Rc::clone(&events);
    let hooks = LifecycleHooks::<DropdownView>::new()
        .on_render(move |view| rendered.borrow_mut().push(format!("render opened={}", view.opened)))
        .on_change(move |view| changed.borrow_mut().push(format!("change opened={}", view.opened)))
        .on_destroy(move || destroyed.borrow_mut().push("destroy".to_string()));

    let mut dropdown = Connected::<Dropdown>::mount_with(&store, DropdownProps::new("menu"), hooks);
    assert!(!dropdown.refresh());

    dropdown.toggle();
    assert!(dropdown.refresh());
    assert!(!dropdown.refresh());
    drop(dropdown);

    assert_eq!(
        *events.borrow(),
        vec!["render opened=false", "change opened=true", "destroy"]
    );
    assert!(!store.state().dropdowns.contains("menu"));
}

/// Test that other widgets' actions do not cause a re-render.
#[test]
fn test_refresh_ignores_unrelated_changes() {
    let store = make_store();
    let mut dropdown = Connected::<Dropdown>::mount(&store, DropdownProps::new("menu"));

    store.dispatch(PaginationIntent::add("p1"));
    store.dispatch(DropdownIntent::add("other"));
    store.dispatch(DropdownIntent::toggle("other"));

    assert!(!dropdown.refresh());
    assert!(!dropdown.view().opened);
}

/// Test that a row with actions publishes them to its table's action bar.
#[test]
fn test_table_row_click_publishes_actions() {
    let (store, log) = make_recording_store();
    let mut bar = Connected::<ActionBar>::mount(&store, ActionBarProps::new("users"));
    let mut row = Connected::<TableRow>::mount(
        &store,
        TableRowProps::new("row-1", "users").with_actions(vec![
            ActionOption::new("edit").primary(),
            ActionOption::new("open").on_double_click(),
        ]),
    );
    log.lock().clear();

    row.click(false);

    assert_eq!(kinds(&log), vec!["ADD_ACTIONS", "TABLE_ROW_SELECT"]);
    assert!(row.refresh());
    assert!(row.view().selected);
    assert!(bar.refresh());
    assert_eq!(
        bar.view().actions.iter().map(|a| a.name.as_str()).collect::<Vec<_>>(),
        vec!["edit", "open"]
    );
    assert_eq!(
        row.double_click_actions().map(|a| a.name.as_str()).collect::<Vec<_>>(),
        vec!["open"]
    );
}

/// Test single selection deselects the sibling rows of the same table.
#[test]
fn test_single_selection_across_rows() {
    let store = make_store();
    let actions = vec![ActionOption::new("edit")];
    let mut first = Connected::<TableRow>::mount(
        &store,
        TableRowProps::new("row-1", "users").with_actions(actions.clone()),
    );
    let mut second = Connected::<TableRow>::mount(
        &store,
        TableRowProps::new("row-2", "users").with_actions(actions),
    );

    first.click(false);
    second.click(false);
    first.refresh();
    second.refresh();

    assert!(!first.view().selected);
    assert!(second.view().selected);
    let selected = store.select(|state| {
        state
            .table_rows
            .selected_in("users")
            .map(str::to_string)
            .collect::<Vec<_>>()
    });
    assert_eq!(selected, vec!["row-2"]);
}

/// Test collapsible rows: expand on mount, late collapsible, click toggle.
#[test]
fn test_collapsible_rows() {
    let store = make_store();
    let mut expanded = Connected::<TableRow>::mount(&store, TableRowProps::new("row-1", "t").collapsible(true));
    assert!(expanded.view().opened);

    expanded.click(false);
    assert!(expanded.refresh());
    assert!(!expanded.view().opened);

    let mut late = Connected::<TableRow>::mount(&store, TableRowProps::new("row-2", "t"));
    assert!(!late.view().opened);
    assert!(late.set_props(TableRowProps::new("row-2", "t").collapsible(true)));
    assert!(late.view().opened);
}

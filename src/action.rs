//! Store-wide action type.
//!
//! Every family owns a closed intent enum; [`Action`] is the closed sum over
//! those families plus the reserved clear-state action, so the root reducer
//! dispatches exhaustively.

use crate::mvi::Intent;
use crate::widgets::action_bar::ActionBarIntent;
use crate::widgets::date_picker::DatePickerIntent;
use crate::widgets::dropdown::DropdownIntent;
use crate::widgets::filter::FilterIntent;
use crate::widgets::input::InputIntent;
use crate::widgets::list_box::ListBoxIntent;
use crate::widgets::loading::LoadingIntent;
use crate::widgets::pagination::PaginationIntent;
use crate::widgets::per_page::PerPageIntent;
use crate::widgets::table_header::TableHeaderIntent;
use crate::widgets::table_row::TableRowIntent;

/// Action type name of [`Action::ClearState`].
pub const CLEAR_STATE: &str = "CLEAR_STATE";

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Pagination(PaginationIntent),
    PerPage(PerPageIntent),
    Loading(LoadingIntent),
    TableRow(TableRowIntent),
    TableHeader(TableHeaderIntent),
    Filter(FilterIntent),
    ListBox(ListBoxIntent),
    ActionBar(ActionBarIntent),
    Dropdown(DropdownIntent),
    Input(InputIntent),
    DatePicker(DatePickerIntent),
    /// Reset every slice to its empty default. Test setup/teardown only.
    ClearState,
}

impl Intent for Action {
    fn kind(&self) -> &'static str {
        match self {
            Action::Pagination(intent) => intent.kind(),
            Action::PerPage(intent) => intent.kind(),
            Action::Loading(intent) => intent.kind(),
            Action::TableRow(intent) => intent.kind(),
            Action::TableHeader(intent) => intent.kind(),
            Action::Filter(intent) => intent.kind(),
            Action::ListBox(intent) => intent.kind(),
            Action::ActionBar(intent) => intent.kind(),
            Action::Dropdown(intent) => intent.kind(),
            Action::Input(intent) => intent.kind(),
            Action::DatePicker(intent) => intent.kind(),
            Action::ClearState => CLEAR_STATE,
        }
    }

    fn from_action(action: &Action) -> Option<&Self> {
        Some(action)
    }
}

/// Wire a family intent into [`Action`]: `From` for dispatching and the
/// projection used by [`crate::mvi::Reducer::reduce_action`].
macro_rules! family_action {
    ($variant:ident, $intent:ty) => {
        impl From<$intent> for Action {
            fn from(intent: $intent) -> Self {
                Action::$variant(intent)
            }
        }

        impl $intent {
            pub(crate) fn project(action: &Action) -> Option<&Self> {
                match action {
                    Action::$variant(intent) => Some(intent),
                    _ => None,
                }
            }
        }
    };
}

family_action!(Pagination, PaginationIntent);
family_action!(PerPage, PerPageIntent);
family_action!(Loading, LoadingIntent);
family_action!(TableRow, TableRowIntent);
family_action!(TableHeader, TableHeaderIntent);
family_action!(Filter, FilterIntent);
family_action!(ListBox, ListBoxIntent);
family_action!(ActionBar, ActionBarIntent);
family_action!(Dropdown, DropdownIntent);
family_action!(Input, InputIntent);
family_action!(DatePicker, DatePickerIntent);

//! Root reducer composing every family reducer.

use crate::action::Action;
use crate::mvi::Reducer;
use crate::widgets::action_bar::ActionBarReducer;
use crate::widgets::date_picker::DatePickerReducer;
use crate::widgets::dropdown::DropdownReducer;
use crate::widgets::filter::FilterReducer;
use crate::widgets::input::InputReducer;
use crate::widgets::list_box::ListBoxReducer;
use crate::widgets::loading::LoadingReducer;
use crate::widgets::pagination::PaginationReducer;
use crate::widgets::per_page::PerPageReducer;
use crate::widgets::table_header::TableHeaderReducer;
use crate::widgets::table_row::TableRowReducer;

use super::state::AppState;

/// Offers every action to every family reducer.
///
/// Families ignore actions that are not theirs, so slices untouched by an
/// action keep their identity.
pub struct RootReducer;

impl Reducer for RootReducer {
    type State = AppState;
    type Intent = Action;

    fn reduce(state: Self::State, action: Self::Intent) -> Self::State {
        if let Action::ClearState = action {
            return AppState::default();
        }

        AppState {
            paginations: PaginationReducer::reduce_action(state.paginations, &action),
            per_pages: PerPageReducer::reduce_action(state.per_pages, &action),
            loadings: LoadingReducer::reduce_action(state.loadings, &action),
            table_rows: TableRowReducer::reduce_action(state.table_rows, &action),
            table_headers: TableHeaderReducer::reduce_action(state.table_headers, &action),
            filters: FilterReducer::reduce_action(state.filters, &action),
            list_boxes: ListBoxReducer::reduce_action(state.list_boxes, &action),
            action_bars: ActionBarReducer::reduce_action(state.action_bars, &action),
            dropdowns: DropdownReducer::reduce_action(state.dropdowns, &action),
            inputs: InputReducer::reduce_action(state.inputs, &action),
            date_pickers: DatePickerReducer::reduce_action(state.date_pickers, &action),
        }
    }
}

use serde::Serialize;

use crate::mvi::UiState;
use crate::widgets::action_bar::ActionBarSlice;
use crate::widgets::date_picker::DatePickerSlice;
use crate::widgets::dropdown::DropdownSlice;
use crate::widgets::filter::FilterSlice;
use crate::widgets::input::InputSlice;
use crate::widgets::list_box::ListBoxSlice;
use crate::widgets::loading::LoadingSlice;
use crate::widgets::pagination::PaginationSlice;
use crate::widgets::per_page::PerPageSlice;
use crate::widgets::table_header::TableHeaderSlice;
use crate::widgets::table_row::TableRowSlice;

/// Every widget family's slice.
///
/// Cloning is cheap: each field is a shared collection handle.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AppState {
    pub paginations: PaginationSlice,
    pub per_pages: PerPageSlice,
    pub loadings: LoadingSlice,
    pub table_rows: TableRowSlice,
    pub table_headers: TableHeaderSlice,
    pub filters: FilterSlice,
    pub list_boxes: ListBoxSlice,
    pub action_bars: ActionBarSlice,
    pub dropdowns: DropdownSlice,
    pub inputs: InputSlice,
    pub date_pickers: DatePickerSlice,
}

impl UiState for AppState {}

impl AppState {
    /// True when no widget of any family is registered.
    pub fn is_empty(&self) -> bool {
        self.paginations.is_empty()
            && self.per_pages.is_empty()
            && self.loadings.is_empty()
            && self.table_rows.is_empty()
            && self.table_headers.is_empty()
            && self.filters.is_empty()
            && self.list_boxes.is_empty()
            && self.action_bars.is_empty()
            && self.dropdowns.is_empty()
            && self.inputs.is_empty()
            && self.date_pickers.is_empty()
    }
}

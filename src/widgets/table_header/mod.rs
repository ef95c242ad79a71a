//! Sortable table header cells, one sorted column per table.

mod binding;
mod intent;
mod reducer;
mod state;

pub use binding::{SortDirection, TableHeaderCell, TableHeaderCellProps, TableHeaderCellView};
pub use intent::TableHeaderIntent;
pub use reducer::TableHeaderReducer;
pub use state::{TableHeaderSlice, TableHeaderState};

//! Table rows: selection and collapsible detail rows.

mod binding;
mod intent;
mod reducer;
mod state;

pub use binding::{CollapsibleRow, TableRow, TableRowProps, TableRowView};
pub use intent::TableRowIntent;
pub use reducer::TableRowReducer;
pub use state::{TableRowSlice, TableRowState};

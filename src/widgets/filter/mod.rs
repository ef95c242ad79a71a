//! Filter boxes and client-side filtering of table data.

mod binding;
mod intent;
mod reducer;
mod state;

pub use binding::{
    default_match_filter, FilterBox, FilterBoxProps, FilterBoxView, TableWithFilter, TableWithFilterProps,
    TableWithFilterView,
};
pub use intent::FilterIntent;
pub use reducer::FilterReducer;
pub use state::{FilterSlice, FilterState};

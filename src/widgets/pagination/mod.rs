//! Pagination: current page of a paged list.

mod binding;
mod intent;
mod reducer;
mod state;

pub use binding::{NavigationPagination, NavigationPaginationProps, NavigationPaginationView};
pub use intent::PaginationIntent;
pub use reducer::PaginationReducer;
pub use state::{PaginationSlice, PaginationState};

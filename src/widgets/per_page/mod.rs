//! Per-page selector: how many items a paged list shows.

mod binding;
mod intent;
mod reducer;
mod state;

pub use binding::{NavigationPerPage, NavigationPerPageProps, NavigationPerPageView};
pub use intent::PerPageIntent;
pub use reducer::PerPageReducer;
pub use state::{PerPageSlice, PerPageState};

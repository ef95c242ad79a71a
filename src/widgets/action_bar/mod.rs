//! Action bars: the actions available for the current table selection.

mod binding;
mod intent;
mod reducer;
mod state;

pub use binding::{ActionBar, ActionBarProps, ActionBarView};
pub use intent::ActionBarIntent;
pub use reducer::ActionBarReducer;
pub use state::{ActionBarSlice, ActionBarState, ActionOption};

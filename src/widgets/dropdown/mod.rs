//! Open/closed state of dropdown menus.

mod binding;
mod intent;
mod reducer;
mod state;

pub use binding::{Dropdown, DropdownProps, DropdownView};
pub use intent::DropdownIntent;
pub use reducer::DropdownReducer;
pub use state::{DropdownSlice, DropdownState};

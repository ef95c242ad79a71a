//! List boxes and the single select built on them.

mod binding;
mod intent;
mod reducer;
mod state;

pub use binding::{SelectItem, SingleSelect, SingleSelectProps, SingleSelectView};
pub use intent::ListBoxIntent;
pub use reducer::ListBoxReducer;
pub use state::{ListBoxSlice, ListBoxState};

//! Loading indicators, switched on in bulk by coordinated dispatches.

mod binding;
mod intent;
mod reducer;
mod state;

pub use binding::{Loading, LoadingProps, LoadingView};
pub use intent::LoadingIntent;
pub use reducer::LoadingReducer;
pub use state::{LoadingSlice, LoadingState};

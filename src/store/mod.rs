//! Application store.
//!
//! Owns the application state (one slice per widget family), applies actions
//! through the root reducer, and notifies subscribers after each commit.

mod handle;
mod reducer;
mod state;

pub use handle::{Store, SubscriptionId};
pub use reducer::RootReducer;
pub use state::AppState;

//! Keyed widget-state slices with reducer-driven lifecycle.
//!
//! Every stateful widget instance owns one record, keyed by its id, in the
//! slice of its family. Widgets register on mount and unregister on unmount
//! through [`binder::Connected`]; all transitions go through the reducers
//! of the [`store::Store`], which is the single authority over state.
//!
//! ```text
//! widget ──→ Connected ──→ Store::dispatch(Action)
//!                              │
//!                       RootReducer ──→ family reducers ──→ AppState
//!                              │
//!                       subscribers ──→ Connected::refresh
//! ```

pub mod action;
pub mod binder;
pub mod config;
pub mod id;
pub mod logging;
pub mod mvi;
pub mod slice;
pub mod store;
pub mod widgets;

//! Lifecycle binder.
//!
//! Bridges a rendering widget's mount/update/unmount lifecycle to the store:
//! a [`WidgetBinding`] names the selector and the action creators, and
//! [`Connected`] composes them with a store handle and the widget's own
//! props.
//!
//! ```text
//! mount ──→ dispatch(mount actions) ──→ select ──→ on_render
//! store change ──→ refresh ──→ select ──→ on_change (only if props differ)
//! unmount / drop ──→ dispatch(unmount actions) ──→ on_destroy
//! ```

mod binding;
mod connected;
mod hooks;

pub use binding::WidgetBinding;
pub use connected::Connected;
pub use hooks::LifecycleHooks;

//! Base trait for intents (user/lifecycle actions) in MVI architecture.

use std::fmt;

use crate::action::Action;

/// Trait for intent objects.
///
/// Intents represent:
/// - Lifecycle events (widget mounted, widget unmounted)
/// - User actions (click, select, sort, filter, page change)
///
/// Every intent belongs to exactly one family and can be recovered from the
/// store-wide [`Action`] it was wrapped in.
pub trait Intent: fmt::Debug + Clone + Send + 'static {
    /// Stable action type name, e.g. `"CHANGE_PAGE"`.
    fn kind(&self) -> &'static str;

    /// Project a store-wide action onto this intent type.
    ///
    /// Returns `None` for actions addressed to another family.
    fn from_action(action: &Action) -> Option<&Self>;
}

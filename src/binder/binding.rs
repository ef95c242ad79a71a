use std::fmt;

use crate::action::Action;
use crate::store::AppState;

/// Connection of one widget kind to the store.
///
/// Implementations are stateless: the selector and the action creators only
/// see the store state and the widget's own props.
pub trait WidgetBinding {
    /// Props supplied by the widget's owner (id, parent id, initial values).
    type OwnProps;

    /// Props derived from the store, the widget renders from these.
    type StateProps: fmt::Debug + Clone + PartialEq;

    /// Project the store state onto the widget's derived props.
    ///
    /// Must not fail when the widget's record is absent (not registered yet,
    /// or already removed); fallback values are returned instead.
    fn select(state: &AppState, props: &Self::OwnProps) -> Self::StateProps;

    /// Actions registering the widget, dispatched in order on mount.
    fn mount_actions(props: &Self::OwnProps) -> Vec<Action>;

    /// Actions unregistering the widget, dispatched in order on unmount.
    fn unmount_actions(props: &Self::OwnProps) -> Vec<Action>;

    /// Actions to dispatch when the owner hands the widget new props.
    fn update_actions(_previous: &Self::OwnProps, _next: &Self::OwnProps) -> Vec<Action> {
        Vec::new()
    }
}

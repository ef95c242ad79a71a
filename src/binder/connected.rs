//! A widget instance wired to the store.

use crate::action::Action;
use crate::store::Store;

use super::binding::WidgetBinding;
use super::hooks::LifecycleHooks;

/// A mounted widget: own props, last derived props, store handle.
///
/// Mounting dispatches the binding's register actions. Dropping the value
/// (or calling [`Connected::unmount`]) dispatches the unregister actions
/// exactly once, whether or not the record still exists in the store.
pub struct Connected<B: WidgetBinding> {
    store: Store,
    props: B::OwnProps,
    view: B::StateProps,
    hooks: LifecycleHooks<B::StateProps>,
}

impl<B: WidgetBinding> Connected<B> {
    pub fn mount(store: &Store, props: B::OwnProps) -> Self {
        Self::mount_with(store, props, LifecycleHooks::new())
    }

    pub fn mount_with(
        store: &Store,
        props: B::OwnProps,
        mut hooks: LifecycleHooks<B::StateProps>,
    ) -> Self {
        store.dispatch_all(B::mount_actions(&props));
        let view = store.select(|state| B::select(state, &props));
        hooks.rendered(&view);

        Self {
            store: store.clone(),
            props,
            view,
            hooks,
        }
    }

    pub fn props(&self) -> &B::OwnProps {
        &self.props
    }

    /// Derived props as of the last mount/refresh.
    pub fn view(&self) -> &B::StateProps {
        &self.view
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Recompute derived props from the current store state.
    ///
    /// Returns `true` (and fires `on_change`) only when they differ from the
    /// previous ones, i.e. when the widget needs to re-render.
    pub fn refresh(&mut self) -> bool {
        let next = self.store.select(|state| B::select(state, &self.props));
        if next == self.view {
            return false;
        }

        self.view = next;
        self.hooks.changed(&self.view);
        true
    }

    /// Replace own props, dispatching the binding's update actions first.
    pub fn set_props(&mut self, props: B::OwnProps) -> bool {
        let actions = B::update_actions(&self.props, &props);
        self.props = props;
        self.store.dispatch_all(actions);
        self.refresh()
    }

    /// Explicit unmount, equivalent to dropping the widget.
    pub fn unmount(self) {
        drop(self);
    }

    pub(crate) fn dispatch(&self, action: impl Into<Action>) {
        self.store.dispatch(action);
    }

    pub(crate) fn dispatch_all(&self, actions: impl IntoIterator<Item = Action>) {
        self.store.dispatch_all(actions);
    }
}

impl<B: WidgetBinding> Drop for Connected<B> {
    fn drop(&mut self) {
        self.store.dispatch_all(B::unmount_actions(&self.props));
        self.hooks.destroyed();
    }
}

use std::fmt;

type ViewCallback<S> = Box<dyn FnMut(&S)>;

/// Optional caller callbacks invoked at lifecycle points.
///
/// Absent callbacks are skipped. None of them can mutate store state; they
/// are notifications for the widget's owner.
pub struct LifecycleHooks<S> {
    on_render: Option<ViewCallback<S>>,
    on_change: Option<ViewCallback<S>>,
    on_destroy: Option<Box<dyn FnOnce()>>,
}

impl<S> LifecycleHooks<S> {
    pub fn new() -> Self {
        Self {
            on_render: None,
            on_change: None,
            on_destroy: None,
        }
    }

    /// Called once after mount with the initial derived props.
    pub fn on_render(mut self, callback: impl FnMut(&S) + 'static) -> Self {
        self.on_render = Some(Box::new(callback));
        self
    }

    /// Called whenever a refresh yields different derived props.
    pub fn on_change(mut self, callback: impl FnMut(&S) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Called once after the unmount actions were dispatched.
    pub fn on_destroy(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_destroy = Some(Box::new(callback));
        self
    }

    pub(crate) fn rendered(&mut self, view: &S) {
        if let Some(callback) = self.on_render.as_mut() {
            callback(view);
        }
    }

    pub(crate) fn changed(&mut self, view: &S) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(view);
        }
    }

    pub(crate) fn destroyed(&mut self) {
        if let Some(callback) = self.on_destroy.take() {
            callback();
        }
    }
}

impl<S> Default for LifecycleHooks<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for LifecycleHooks<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LifecycleHooks")
            .field("on_render", &self.on_render.is_some())
            .field("on_change", &self.on_change.is_some())
            .field("on_destroy", &self.on_destroy.is_some())
            .finish()
    }
}

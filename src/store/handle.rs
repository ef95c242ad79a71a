//! Shared store handle.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex, RwLock};

use crate::action::Action;
use crate::config::StoreConfig;
use crate::mvi::{Intent, Reducer};

use super::reducer::RootReducer;
use super::state::AppState;

type Listener = Arc<dyn Fn(&AppState, &Action) + Send + Sync>;

/// Handle returned by [`Store::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Process-local store with synchronous dispatch.
///
/// Cloning yields another handle to the same store. Dispatch is serialized:
/// an action is reduced, committed and announced to every listener before
/// the next one is reduced, so listeners see states in commit order.
///
/// A listener may dispatch. The nested action is queued and applied once the
/// current notification round is over, before the outer `dispatch` returns.
/// A listener must not wait on another thread that dispatches to the same
/// store, since that thread blocks until the outer dispatch returns.
#[derive(Clone)]
pub struct Store {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    config: StoreConfig,
    state: RwLock<AppState>,
    /// Held by the thread applying actions, for the whole drain.
    dispatching: ReentrantMutex<RefCell<DispatchQueue>>,
    last_action: RwLock<Option<Action>>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicU64,
}

#[derive(Default)]
struct DispatchQueue {
    pending: VecDeque<Action>,
    draining: bool,
}

/// Resets the queue when a drain ends, including by a panicking listener.
struct DrainGuard<'a>(&'a RefCell<DispatchQueue>);

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        let mut queue = self.0.borrow_mut();
        queue.pending.clear();
        queue.draining = false;
    }
}

impl Store {
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self::with_state(config, AppState::default())
    }

    /// Create a store around a preloaded state.
    pub fn with_state(config: StoreConfig, state: AppState) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                config,
                state: RwLock::new(state),
                dispatching: ReentrantMutex::new(RefCell::new(DispatchQueue::default())),
                last_action: RwLock::new(None),
                listeners: Mutex::new(Vec::new()),
                next_subscription: AtomicU64::new(0),
            }),
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> AppState {
        self.inner.state.read().clone()
    }

    /// Run a selector against the current state without cloning it.
    pub fn select<T>(&self, selector: impl FnOnce(&AppState) -> T) -> T {
        selector(&self.inner.state.read())
    }

    /// Apply one action and notify subscribers.
    ///
    /// Called from a listener, the action is queued behind the one being
    /// announced and this returns immediately.
    pub fn dispatch(&self, action: impl Into<Action>) {
        let dispatching = self.inner.dispatching.lock();
        {
            let mut queue = dispatching.borrow_mut();
            queue.pending.push_back(action.into());
            if queue.draining {
                return;
            }
            queue.draining = true;
        }

        let _drain = DrainGuard(&*dispatching);
        loop {
            // The borrow must end before notifying: listeners re-enter here.
            let next_action = dispatching.borrow_mut().pending.pop_front();
            let Some(action) = next_action else {
                break;
            };
            let next = self.apply(&action);
            self.notify(&next, &action);
        }
    }

    fn apply(&self, action: &Action) -> AppState {
        if self.inner.config.log_actions {
            tracing::trace!(action = action.kind(), "Dispatching action");
        }
        if let Action::ClearState = action {
            tracing::debug!("Clearing store state");
        }

        let current = self.inner.state.read().clone();
        let next = RootReducer::reduce(current, action.clone());
        *self.inner.state.write() = next.clone();
        *self.inner.last_action.write() = Some(action.clone());
        next
    }

    /// Apply several actions in order (coordinated multi-dispatch).
    ///
    /// Not atomic: subscribers are notified after each action.
    pub fn dispatch_all(&self, actions: impl IntoIterator<Item = Action>) {
        for action in actions {
            self.dispatch(action);
        }
    }

    /// Reset every slice to its empty default.
    pub fn clear_state(&self) {
        self.dispatch(Action::ClearState);
    }

    /// The most recently applied action.
    pub fn last_action(&self) -> Option<Action> {
        self.inner.last_action.read().clone()
    }

    /// Register a listener called after every dispatch with the state the
    /// action produced.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&AppState, &Action) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.inner.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(registered, _)| *registered != id);
        listeners.len() != before
    }

    /// Serialize the current state as pretty JSON, for debugging tools.
    pub fn snapshot_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&*self.inner.state.read())
    }

    fn notify(&self, state: &AppState, action: &Action) {
        // Snapshot so listeners can (un)subscribe or dispatch re-entrantly.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        for listener in listeners {
            listener(state, action);
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("state", &*self.inner.state.read())
            .field("listeners", &self.inner.listeners.lock().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::pagination::PaginationIntent;

    #[test]
    fn dispatch_updates_state_and_last_action() {
        let store = Store::new();
        store.dispatch(PaginationIntent::add("p1"));

        assert!(store.state().paginations.contains("p1"));
        assert_eq!(store.last_action(), Some(PaginationIntent::add("p1").into()));
    }

    #[test]
    fn unsubscribe_unknown_returns_false() {
        let store = Store::new();
        let id = store.subscribe(|_, _| {});
        assert!(store.unsubscribe(id));
        assert!(!store.unsubscribe(id));
    }

    #[test]
    fn listener_may_dispatch() {
        let store = Store::new();
        let handle = store.clone();
        store.subscribe(move |_, action| {
            if let Action::Pagination(PaginationIntent::Add { id }) = action {
                handle.dispatch(PaginationIntent::change_page(id.clone(), 1));
            }
        });

        store.dispatch(PaginationIntent::add("p1"));

        let page = store.select(|state| state.paginations.find("p1").map(|p| p.page_nb));
        assert_eq!(page, Some(1));
    }

    #[test]
    fn nested_dispatch_is_announced_after_outer_action() {
        let store = Store::new();
        let handle = store.clone();
        store.subscribe(move |_, action| {
            if let Action::Pagination(PaginationIntent::Add { id }) = action {
                handle.dispatch(PaginationIntent::change_page(id.clone(), 7));
            }
        });
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        store.subscribe(move |state, action| {
            let page = state.paginations.find("p1").map(|p| p.page_nb);
            sink.lock().push((action.kind(), page));
        });

        store.dispatch(PaginationIntent::add("p1"));

        assert_eq!(
            *seen.lock(),
            vec![("ADD_PAGINATION", Some(0)), ("CHANGE_PAGE", Some(7))]
        );
        assert_eq!(store.last_action(), Some(PaginationIntent::change_page("p1", 7).into()));
    }

    #[test]
    fn panicking_listener_does_not_wedge_dispatch() {
        let store = Store::new();
        let id = store.subscribe(|_, _| panic!("listener failure"));

        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            store.dispatch(PaginationIntent::add("p1"));
        }));
        assert!(outcome.is_err());
        store.unsubscribe(id);

        store.dispatch(PaginationIntent::add("p2"));
        assert!(store.state().paginations.contains("p2"));
    }

    #[test]
    fn snapshot_json_lists_records() {
        let store = Store::new();
        store.dispatch(PaginationIntent::add("p1"));

        let json = store.snapshot_json().unwrap();
        assert!(json.contains("\"paginations\""));
        assert!(json.contains("\"p1\""));
    }
}

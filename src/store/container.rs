//! The state container.

use std::cell::Cell;
use std::sync::Arc;

use parking_lot::{Mutex, ReentrantMutex, RwLock};
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::action::{Action, ACTION_TYPE_FIELD};
use super::builder::StoreBuilder;
use super::error::StoreError;
use super::reducer::Reducer;
use super::subscription::{ObserverRegistry, Subscription};

/// Single-cell state container driven by one reducer.
///
/// Dispatches are serialized: the whole read-compute-commit-notify cycle
/// runs under a thread-reentrant lock, so a dispatch from another thread
/// waits for the current cycle while a dispatch from the notifying thread
/// itself fails with [`StoreError::Reentrancy`].
///
/// Observers are notified after every accepted dispatch, even when the
/// reducer returned the same state.
pub struct Store<R: Reducer> {
    reducer: R,
    state: RwLock<Arc<R::State>>,
    observers: Arc<Mutex<ObserverRegistry>>,
    /// `true` while a dispatch cycle is running on the lock owner's thread.
    cycle: ReentrantMutex<Cell<bool>>,
}

impl<R: Reducer> Store<R> {
    /// Create a store.
    ///
    /// The reducer is run once with [`Action::init`] over `initial_state`
    /// (or `State::default()` when `None`), and its result becomes the
    /// first committed state.
    pub fn new(reducer: R, initial_state: Option<R::State>) -> Result<Self, StoreError> {
        let seed = Arc::new(initial_state.unwrap_or_default());
        let state = reducer
            .reduce(&seed, &<R::Action as Action>::init())
            .map_err(StoreError::Reducer)?;

        Ok(Self {
            reducer,
            state: RwLock::new(state),
            observers: Arc::new(Mutex::new(ObserverRegistry::default())),
            cycle: ReentrantMutex::new(Cell::new(false)),
        })
    }

    pub fn builder() -> StoreBuilder<R> {
        StoreBuilder::default()
    }

    /// Current state. Cheap: clones the `Arc`, not the value.
    pub fn get_state(&self) -> Arc<R::State> {
        Arc::clone(&self.state.read())
    }

    /// Run `action` through the reducer, commit the result, and notify
    /// observers in registration order.
    ///
    /// Returns the action back for chaining.
    ///
    /// # Errors
    /// - [`StoreError::InvalidAction`] if the action's discriminant is empty.
    /// - [`StoreError::Reentrancy`] if called from inside a running dispatch
    ///   on the same thread.
    /// - [`StoreError::Reducer`] if the reducer fails. The state is unchanged.
    pub fn dispatch(&self, action: R::Action) -> Result<R::Action, StoreError> {
        if action.action_type().is_empty() {
            return Err(StoreError::invalid_action("action type must not be empty"));
        }

        let cycle = self.cycle.lock();
        if cycle.get() {
            return Err(StoreError::Reentrancy);
        }
        cycle.set(true);
        let _idle = scopeguard::guard(&*cycle, |running| running.set(false));

        let current = self.get_state();
        let next = self
            .reducer
            .reduce(&current, &action)
            .map_err(StoreError::Reducer)?;
        *self.state.write() = next;

        self.notify();
        Ok(action)
    }

    /// Dispatch an untyped action object such as `{"type": "INCREASE", "difference": 5}`.
    ///
    /// # Errors
    /// [`StoreError::InvalidAction`] if `value` is not an object, has no
    /// non-empty string `"type"` field, or does not decode into the
    /// reducer's action type. Otherwise the same errors as [`Store::dispatch`].
    pub fn dispatch_value(&self, value: Value) -> Result<R::Action, StoreError>
    where
        R::Action: DeserializeOwned,
    {
        let Some(fields) = value.as_object() else {
            return Err(StoreError::invalid_action("action must be an object"));
        };
        match fields.get(ACTION_TYPE_FIELD) {
            Some(Value::String(action_type)) if !action_type.is_empty() => {}
            Some(_) => {
                return Err(StoreError::invalid_action(format!(
                    "\"{ACTION_TYPE_FIELD}\" must be a non-empty string"
                )))
            }
            None => {
                return Err(StoreError::invalid_action(format!(
                    "missing \"{ACTION_TYPE_FIELD}\" field"
                )))
            }
        }

        let action = serde_json::from_value(value)
            .map_err(|err| StoreError::invalid_action(err.to_string()))?;
        self.dispatch(action)
    }

    /// Register an observer. It is called with no arguments after every
    /// accepted dispatch until the returned handle is redeemed.
    ///
    /// Registering the same closure twice creates two registrations.
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.observers.lock().insert(Arc::new(observer));
        Subscription::new(Arc::downgrade(&self.observers), id)
    }

    /// Number of registered observers.
    pub fn subscriber_count(&self) -> usize {
        self.observers.lock().len()
    }

    fn notify(&self) {
        // Registry lock is released before any observer runs.
        let snapshot = self.observers.lock().snapshot();
        for slot in snapshot {
            slot.notify();
        }
    }
}

//! Reducer trait for the store.

use std::marker::PhantomData;
use std::sync::Arc;

use super::action::Action;
use super::state::StoreState;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Action) -> State. It must not read
/// anything outside its arguments, perform I/O, or mutate its inputs.
///
/// Returning the same `Arc` (pointer-equal) signals that the action did not
/// apply; any change must be returned as a freshly allocated state.
pub trait Reducer: Send + Sync + 'static {
    /// The state type this reducer operates on.
    type State: StoreState;

    /// The action type this reducer handles.
    type Action: Action;

    /// Process an action and return the next state.
    ///
    /// An error leaves the store at its previously committed state and is
    /// handed back to the dispatch caller unchanged.
    fn reduce(
        &self,
        state: &Arc<Self::State>,
        action: &Self::Action,
    ) -> anyhow::Result<Arc<Self::State>>;
}

/// Reducer backed by a plain function or closure. Built with [`reducer_fn`].
pub struct FnReducer<S, A, F> {
    reduce: F,
    _marker: PhantomData<fn(&S, &A)>,
}

/// Wrap a function as a [`Reducer`].
pub fn reducer_fn<S, A, F>(reduce: F) -> FnReducer<S, A, F>
where
    S: StoreState,
    A: Action,
    F: Fn(&Arc<S>, &A) -> anyhow::Result<Arc<S>> + Send + Sync + 'static,
{
    FnReducer {
        reduce,
        _marker: PhantomData,
    }
}

impl<S, A, F> Reducer for FnReducer<S, A, F>
where
    S: StoreState,
    A: Action,
    F: Fn(&Arc<S>, &A) -> anyhow::Result<Arc<S>> + Send + Sync + 'static,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: &Arc<S>, action: &A) -> anyhow::Result<Arc<S>> {
        (self.reduce)(state, action)
    }
}

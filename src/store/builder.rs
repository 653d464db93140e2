use super::container::Store;
use super::error::StoreError;
use super::reducer::Reducer;

/// Step-by-step construction of a [`Store`].
///
/// ```
/// use unistate::counter::{CounterReducer, CounterState};
/// use unistate::store::Store;
///
/// let store = Store::builder()
///     .reducer(CounterReducer)
///     .initial_state(CounterState::new(false, 3))
///     .build()
///     .unwrap();
/// assert_eq!(store.get_state().counter, 3);
/// ```
pub struct StoreBuilder<R: Reducer> {
    reducer: Option<R>,
    initial_state: Option<R::State>,
}

impl<R: Reducer> Default for StoreBuilder<R> {
    fn default() -> Self {
        Self {
            reducer: None,
            initial_state: None,
        }
    }
}

impl<R: Reducer> StoreBuilder<R> {
    pub fn reducer(mut self, reducer: R) -> Self {
        self.reducer = Some(reducer);
        self
    }

    pub fn initial_state(mut self, state: R::State) -> Self {
        self.initial_state = Some(state);
        self
    }

    /// Build the store.
    ///
    /// # Errors
    /// [`StoreError::Configuration`] if no reducer was supplied, or
    /// [`StoreError::Reducer`] if the reducer rejects the init action.
    pub fn build(self) -> Result<Store<R>, StoreError> {
        let reducer = self.reducer.ok_or_else(|| StoreError::Configuration {
            message: "a reducer is required".to_string(),
        })?;
        Store::new(reducer, self.initial_state)
    }
}

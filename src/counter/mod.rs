//! Toggle/counter feature module.
//!
//! The state behind the demo screen: one on/off switch and one integer
//! counter.
//!
//! # Architecture
//!
//! - `state.rs` - `CounterState { toggle, counter }`
//! - `action.rs` - `TOGGLE_SWITCH`, `INCREASE`, `DECREASE` and their factories
//! - `reducer.rs` - State transitions (pure, no side effects)

mod action;
mod reducer;
mod state;

pub use action::{
    decrease, increase, toggle_switch, CounterAction, DECREASE, INCREASE, TOGGLE_SWITCH,
};
pub use reducer::{CounterError, CounterReducer};
pub use state::CounterState;

use crate::store::{Store, StoreError};

/// Store specialised for the toggle/counter demo.
pub type CounterStore = Store<CounterReducer>;

/// Build a counter store, starting from `initial` or the default state.
pub fn counter_store(initial: Option<CounterState>) -> Result<CounterStore, StoreError> {
    Store::new(CounterReducer, initial)
}

//! Reducer for the toggle/counter screen.

use std::sync::Arc;

use thiserror::Error;

use crate::store::Reducer;

use super::action::CounterAction;
use super::state::CounterState;

/// Failures raised by [`CounterReducer`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CounterError {
    #[error("Counter overflow: {counter} + {difference} does not fit in i64")]
    Overflow { counter: i64, difference: i64 },
}

/// Reducer for toggle/counter state transitions.
///
/// Pure function. Init and unrecognised actions hand back the same `Arc`.
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(
        &self,
        state: &Arc<CounterState>,
        action: &CounterAction,
    ) -> anyhow::Result<Arc<CounterState>> {
        let next = match action {
            CounterAction::ToggleSwitch => CounterState {
                toggle: !state.toggle,
                ..**state
            },
            CounterAction::Increase { difference } => CounterState {
                counter: shift(state.counter, *difference)?,
                ..**state
            },
            CounterAction::Decrease => CounterState {
                counter: shift(state.counter, -1)?,
                ..**state
            },
            CounterAction::Init | CounterAction::Unknown => return Ok(Arc::clone(state)),
        };
        Ok(Arc::new(next))
    }
}

fn shift(counter: i64, difference: i64) -> Result<i64, CounterError> {
    counter
        .checked_add(difference)
        .ok_or(CounterError::Overflow {
            counter,
            difference,
        })
}

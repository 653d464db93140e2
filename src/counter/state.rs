//! State for the toggle/counter screen.

use serde::{Deserialize, Serialize};

use crate::store::StoreState;

/// Everything the screen renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CounterState {
    /// Whether the switch is on.
    pub toggle: bool,
    pub counter: i64,
}

impl StoreState for CounterState {}

impl CounterState {
    pub fn new(toggle: bool, counter: i64) -> Self {
        Self { toggle, counter }
    }
}

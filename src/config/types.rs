use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::counter::CounterState;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub initial: InitialState,
}

/// Default settings for the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Difference dispatched by the increase key and bare `inc` (default: 1).
    #[serde(default = "default_increase_step")]
    pub increase_step: i64,
    /// UI poll interval in milliseconds (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

/// State the store starts from.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InitialState {
    #[serde(default)]
    pub toggle: bool,
    #[serde(default)]
    pub counter: i64,
}

fn default_increase_step() -> i64 {
    1
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            increase_step: default_increase_step(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

impl Defaults {
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl From<&InitialState> for CounterState {
    fn from(initial: &InitialState) -> Self {
        CounterState::new(initial.toggle, initial.counter)
    }
}

//! Command-line surface.

mod apply;

pub use apply::{parse_action, print_state, run_apply, ActionParseError};

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::counter::CounterState;

#[derive(Debug, Parser)]
#[command(
    name = "unistate",
    version,
    about = "Toggle switch and counter driven by a unidirectional state store"
)]
pub struct Args {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the initial counter value
    #[arg(long, value_name = "N", allow_hyphen_values = true)]
    pub counter: Option<i64>,

    /// Start with the switch turned on
    #[arg(long)]
    pub toggle: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Dispatch actions without the terminal UI and print the state as JSON
    Apply {
        /// Print only the final state
        #[arg(long)]
        quiet: bool,

        /// Actions: toggle, inc, inc:N, dec, or a JSON object such as
        /// '{"type":"INCREASE","difference":5}'
        #[arg(value_name = "ACTION", required = true)]
        actions: Vec<String>,
    },
}

impl Args {
    /// Initial store state: config file values with command-line overrides.
    pub fn initial_state(&self, config: &Config) -> CounterState {
        let mut state = CounterState::from(&config.initial);
        if let Some(counter) = self.counter {
            state.counter = counter;
        }
        if self.toggle {
            state.toggle = true;
        }
        state
    }
}

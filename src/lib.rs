//! Unidirectional state container with a toggle/counter front end.
//!
//! [`store`] holds the container itself. [`counter`] is the demo feature
//! built on it, driven either by the terminal UI in [`ui`] or headlessly
//! through [`cli`].

pub mod cli;
pub mod config;
pub mod counter;
pub mod logging;
pub mod store;
pub mod ui;

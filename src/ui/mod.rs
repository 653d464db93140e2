//! Interactive terminal front end.
//!
//! Rendering and input collaborators for the counter store: `render` reads
//! state and paints it, `input` turns key presses into dispatched actions.

pub mod app;
mod events;
mod footer;
mod header;
pub mod input;
mod layout;
pub mod render;
mod runtime;
mod terminal_guard;
mod theme;

pub use runtime::run;

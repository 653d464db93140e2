//! Unidirectional state container.
//!
//! A [`Store`] owns one state value and changes it only by running a pure
//! [`Reducer`] over dispatched [`Action`]s. Every accepted dispatch commits
//! the reducer's result and then notifies the registered observers.
//!
//! # Architecture
//!
//! ```text
//! dispatch(Action) ──→ Reducer ──→ State (commit) ──→ observers
//!        ↑                                               │
//!        └──────────────── get_state() ←─────────────────┘
//! ```
//!
//! - **State**: immutable value shared behind `Arc`
//! - **Action**: tagged request for a transition
//! - **Reducer**: pure function `(State, Action) -> State`
//! - **Observer**: zero-argument callback that pulls state when called

mod action;
mod builder;
mod container;
mod error;
mod reducer;
mod state;
mod subscription;

pub use action::{Action, ACTION_TYPE_FIELD, INIT_ACTION_TYPE};
pub use builder::StoreBuilder;
pub use container::Store;
pub use error::StoreError;
pub use reducer::{reducer_fn, FnReducer, Reducer};
pub use state::StoreState;
pub use subscription::Subscription;

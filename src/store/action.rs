//! Base trait for actions dispatched to a store.

use std::fmt;

/// Name of the discriminant field in the serialized form of an action.
pub const ACTION_TYPE_FIELD: &str = "type";

/// Discriminant of the action dispatched once when a store is constructed.
pub const INIT_ACTION_TYPE: &str = "@@unistate/INIT";

/// An immutable request for a state transition.
///
/// Actions are processed by reducers to produce new states. The
/// discriminant returned by [`Action::action_type`] identifies which
/// transition applies; payload lives in the implementing type.
pub trait Action: fmt::Debug + Sized + Send + 'static {
    /// Discriminant naming the transition. Must not be empty.
    fn action_type(&self) -> &str;

    /// The sentinel action dispatched at construction so the reducer's
    /// fallback branch can establish the initial state.
    fn init() -> Self;
}

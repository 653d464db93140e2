use thiserror::Error;

/// Errors surfaced by [`Store`](super::Store) operations.
///
/// The store never recovers locally: every failure goes straight back to
/// the caller of the operation that triggered it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Construction was attempted without a required argument.
    #[error("Store configuration error: {message}")]
    Configuration { message: String },

    /// The dispatched value has no usable discriminant or a malformed payload.
    #[error("Invalid action: {reason}")]
    InvalidAction { reason: String },

    /// `dispatch` was called while the same thread was already inside a
    /// dispatch cycle (typically from an observer).
    #[error("Dispatch is not allowed while observers are being notified")]
    Reentrancy,

    /// The reducer failed; the stored state was left untouched.
    #[error(transparent)]
    Reducer(anyhow::Error),
}

impl StoreError {
    pub(crate) fn invalid_action(reason: impl Into<String>) -> Self {
        StoreError::InvalidAction {
            reason: reason.into(),
        }
    }
}

//! Base trait for state held by a store.

/// Marker trait for store state objects.
///
/// States should be:
/// - Immutable (the store only hands them out behind `Arc`)
/// - Self-contained (all data a renderer needs)
/// - Comparable (PartialEq for detecting changes)
///
/// `Default` supplies the value a reducer starts from when the caller
/// does not provide an initial state.
pub trait StoreState: Clone + PartialEq + Default + Send + Sync + 'static {}

//! Base trait for state snapshots.

/// Marker trait for state snapshots.
///
/// States should be:
/// - Immutable (Clone to create new snapshots)
/// - Self-contained (everything an observer needs)
/// - Comparable (PartialEq for distinct-until-changed observation)
pub trait State: Clone + PartialEq + Default + Send + Sync + 'static {}

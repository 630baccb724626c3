//! Base trait for actions dispatched to a store.

/// Marker trait for action objects.
///
/// Actions represent:
/// - User gestures forwarded by an interactor
/// - Engine events (translation progress, tab lifecycle)
///
/// Actions are consumed by reducers to produce new states.
pub trait Action: std::fmt::Debug + Send + 'static {}

//! Action trait for type-safe state mutations

use std::fmt::Debug;

/// Marker trait for actions that can be dispatched to the store.
///
/// Actions represent intents to change state. They should be:
/// - Clone: actions may be logged or sent to multiple handlers
/// - Debug: for debugging and logging
/// - Send + 'static: for dispatch from async tasks
pub trait Action: Clone + Debug + Send + 'static {
    /// Get the action name for logging and filtering
    fn name(&self) -> &'static str;
}

//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents carry already-validated input; a reducer never has to
/// reject one.
pub trait Intent: Send + 'static {}

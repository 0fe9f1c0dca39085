/// Marker trait for intents: key presses, clicks, lookup completions.
pub trait Intent: Send + 'static {}

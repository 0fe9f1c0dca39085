/// Marker trait for UI state objects.
///
/// States are plain values: cloned to create new states, compared to
/// detect changes, and defaulted to their initial screen.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

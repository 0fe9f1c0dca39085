//! The movie search screen: query text, lookup status and its rendering.

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::{LookupOutcome, SearchIntent};
pub use reducer::SearchReducer;
pub use state::{SearchState, SearchStatus};
pub use view::{error_text, SearchView, ERROR_SUFFIX};

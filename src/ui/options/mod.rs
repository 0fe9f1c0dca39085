//! Search options dialog: plot length and the movies-only filter.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::{OptionsDialog, OptionsHandles};
pub use intent::OptionsIntent;
pub use reducer::OptionsReducer;
pub use state::{OptionsDialogState, OptionsField, SearchOptions};

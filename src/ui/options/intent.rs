use super::state::{OptionsField, SearchOptions};
use crate::ui::components::DismissReason;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum OptionsIntent {
    /// Show the dialog seeded with the options currently in effect.
    Open { current: SearchOptions },
    FocusNext,
    FocusPrev,
    /// Focus a field directly (mouse click).
    Focus(OptionsField),
    /// Enter/Space on the focused field: open or commit the select, toggle
    /// the checkbox. Apply is handled by the caller.
    Activate,
    MoveUp,
    MoveDown,
    /// Choose plot list item `index` directly (mouse click on the row).
    PickPlot(usize),
    /// Close the plot list without changing the selection.
    CloseList,
    Dismiss(DismissReason),
    Close,
}

impl Intent for OptionsIntent {}

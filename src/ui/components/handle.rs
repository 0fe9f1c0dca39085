use std::sync::Arc;

use parking_lot::Mutex;
use ratatui::layout::Rect;

#[derive(Debug, Default)]
struct Slot {
    area: Option<Rect>,
    focused: bool,
}

/// Owner-side handle to a rendered primitive.
///
/// A widget bound to a handle records the area it was drawn into on every
/// render. The owner keeps a clone and uses it to measure the element, hit
/// test mouse clicks, and move focus, without reaching into the widget.
#[derive(Debug, Clone, Default)]
pub struct ElementHandle {
    slot: Arc<Mutex<Slot>>,
}

impl ElementHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focus(&self) {
        self.slot.lock().focused = true;
    }

    pub fn blur(&self) {
        self.slot.lock().focused = false;
    }

    pub fn is_focused(&self) -> bool {
        self.slot.lock().focused
    }

    /// Area covered by the last render, if the element has been drawn.
    pub fn area(&self) -> Option<Rect> {
        self.slot.lock().area
    }

    /// True if the cell at `(column, row)` lies inside the last render.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        let Some(area) = self.area() else {
            return false;
        };
        column >= area.x
            && column < area.x.saturating_add(area.width)
            && row >= area.y
            && row < area.y.saturating_add(area.height)
    }

    /// Drop the recorded area, e.g. when the element stops being drawn.
    pub fn forget(&self) {
        self.slot.lock().area = None;
    }

    pub(crate) fn record(&self, area: Rect) {
        self.slot.lock().area = Some(area);
    }
}

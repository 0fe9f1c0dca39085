use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::ui::components::ElementHandle;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, MUTED_TEXT, STATUS_OK, TEXT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckState {
    Checked,
    #[default]
    Unchecked,
}

impl CheckState {
    pub fn is_checked(self) -> bool {
        self == CheckState::Checked
    }
}

impl From<bool> for CheckState {
    fn from(checked: bool) -> Self {
        if checked {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CheckboxState {
    state: CheckState,
    disabled: bool,
}

impl CheckboxState {
    pub fn new(checked: bool) -> Self {
        Self {
            state: checked.into(),
            disabled: false,
        }
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn state(&self) -> CheckState {
        self.state
    }

    pub fn is_checked(&self) -> bool {
        self.state.is_checked()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Flip the check mark. Returns false (and changes nothing) when disabled.
    pub fn toggle(&mut self) -> bool {
        if self.disabled {
            return false;
        }
        self.state = (!self.state.is_checked()).into();
        true
    }
}

/// `[x] label` toggle.
pub struct Checkbox<'a> {
    state: &'a CheckboxState,
    label: &'a str,
    handle: Option<ElementHandle>,
}

impl<'a> Checkbox<'a> {
    pub fn new(state: &'a CheckboxState, label: &'a str) -> Self {
        Self {
            state,
            label,
            handle: None,
        }
    }

    pub fn handle(mut self, handle: &ElementHandle) -> Self {
        self.handle = Some(handle.clone());
        self
    }
}

impl Widget for Checkbox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let area = Rect { height: 1, ..area };
        let focused = match &self.handle {
            Some(handle) => {
                handle.record(area);
                handle.is_focused()
            }
            None => false,
        };

        let (mark, mark_style) = if self.state.is_checked() {
            ("[x]", Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD))
        } else {
            ("[ ]", Style::default().fg(TEXT))
        };
        let mut label_style = Style::default().fg(TEXT);
        if self.state.disabled {
            label_style = label_style.fg(MUTED_TEXT).add_modifier(Modifier::DIM);
        }
        if focused {
            buf.set_style(area, Style::default().bg(ACTIVE_HIGHLIGHT));
            label_style = label_style.add_modifier(Modifier::BOLD);
        }

        let width = area.width as usize;
        let (x, _) = buf.set_stringn(area.x, area.y, mark, width, mark_style);
        let used = (x - area.x) as usize;
        if used + 1 < width {
            buf.set_stringn(x + 1, area.y, self.label, width - used - 1, label_style);
        }
    }
}

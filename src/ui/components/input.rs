use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Widget};

use crate::ui::components::ElementHandle;
use crate::ui::theme::{FOCUS_RING, MUTED_TEXT, PANEL_BORDER, TEXT};

/// Height of a rendered input: text row plus border.
pub const INPUT_HEIGHT: u16 = 3;

/// Text being edited and the cursor position, in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    value: String,
    cursor: usize,
}

impl InputState {
    /// State holding `value` with the cursor at the end.
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply an editing key. Returns the new value when the text changed.
    ///
    /// Cursor movement alone returns `None`.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<String> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        let changed = match key.code {
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.cursor = 0;
                let had_text = !self.value.is_empty();
                self.value.clear();
                had_text
            }
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert(ch);
                true
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.len());
                false
            }
            KeyCode::Home => {
                self.cursor = 0;
                false
            }
            KeyCode::End => {
                self.cursor = self.len();
                false
            }
            _ => false,
        };

        changed.then(|| self.value.clone())
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(index, _)| index)
            .unwrap_or(self.value.len())
    }

    fn insert(&mut self, ch: char) {
        let index = self.byte_index(self.cursor);
        self.value.insert(index, ch);
        self.cursor += 1;
    }

    fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let index = self.byte_index(self.cursor);
        self.value.remove(index);
        true
    }

    fn delete(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let index = self.byte_index(self.cursor);
        self.value.remove(index);
        true
    }
}

/// Bordered single-line text field.
pub struct Input<'a> {
    state: &'a InputState,
    placeholder: &'a str,
    disabled: bool,
    masked: bool,
    handle: Option<ElementHandle>,
}

impl<'a> Input<'a> {
    pub fn new(state: &'a InputState) -> Self {
        Self {
            state,
            placeholder: "",
            disabled: false,
            masked: false,
            handle: None,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Hide the characters (password-style field).
    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn handle(mut self, handle: &ElementHandle) -> Self {
        self.handle = Some(handle.clone());
        self
    }

    /// Terminal cursor position for a field rendered at `area`, or `None`
    /// if the area has no room for text.
    pub fn cursor_position(area: Rect, state: &InputState) -> Option<Position> {
        let text_width = area.width.checked_sub(2).filter(|w| *w > 0)? as usize;
        if area.height < INPUT_HEIGHT {
            return None;
        }
        let offset = scroll_offset(state.cursor, text_width);
        Some(Position {
            x: area.x + 1 + (state.cursor - offset) as u16,
            y: area.y + 1,
        })
    }
}

/// First visible character so that the cursor stays inside `width` columns.
fn scroll_offset(cursor: usize, width: usize) -> usize {
    if cursor < width {
        0
    } else {
        cursor + 1 - width
    }
}

impl Widget for Input<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = Rect {
            height: area.height.min(INPUT_HEIGHT),
            ..area
        };
        let focused = match &self.handle {
            Some(handle) => {
                handle.record(area);
                handle.is_focused()
            }
            None => false,
        };

        let border_color = if focused && !self.disabled {
            FOCUS_RING
        } else {
            PANEL_BORDER
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let width = inner.width as usize;
        let (text, style) = if self.state.value.is_empty() {
            (
                self.placeholder.to_string(),
                Style::default().fg(MUTED_TEXT),
            )
        } else {
            let offset = scroll_offset(self.state.cursor, width);
            let visible: String = self
                .state
                .value
                .chars()
                .skip(offset)
                .take(width)
                .map(|ch| if self.masked { '•' } else { ch })
                .collect();
            (visible, Style::default().fg(TEXT))
        };

        let style = if self.disabled {
            style.add_modifier(Modifier::DIM)
        } else {
            style
        };
        buf.set_stringn(inner.x, inner.y, text, width, style);
    }
}

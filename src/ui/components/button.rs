use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Widget;

use crate::ui::components::ElementHandle;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, DESTRUCTIVE, FOCUS_RING, MUTED_TEXT, PRIMARY, PRIMARY_FOREGROUND,
    SECONDARY, TEXT,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Default,
    Destructive,
    Outline,
    Secondary,
    Ghost,
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    #[default]
    Default,
    Sm,
    Lg,
    Icon,
}

impl ButtonSize {
    /// Blank columns on each side of the label.
    fn padding(self) -> u16 {
        match self {
            ButtonSize::Default => 2,
            ButtonSize::Sm => 1,
            ButtonSize::Lg => 4,
            ButtonSize::Icon => 1,
        }
    }
}

/// Single-line push button.
pub struct Button<'a> {
    label: &'a str,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    handle: Option<ElementHandle>,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            handle: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn handle(mut self, handle: &ElementHandle) -> Self {
        self.handle = Some(handle.clone());
        self
    }

    /// Columns the button occupies.
    pub fn width(&self) -> u16 {
        let label = Span::raw(self.label).width() as u16;
        match self.size {
            ButtonSize::Icon => label.max(1) + 2,
            size => {
                let frame = if self.variant == ButtonVariant::Outline { 2 } else { 0 };
                label + size.padding() * 2 + frame
            }
        }
    }

    /// Whether a press should trigger the button's action.
    pub fn is_activatable(&self) -> bool {
        !self.disabled
    }

    fn style(&self, focused: bool) -> Style {
        if self.disabled {
            return Style::default()
                .fg(MUTED_TEXT)
                .add_modifier(Modifier::DIM);
        }

        let base = match self.variant {
            ButtonVariant::Default => Style::default().fg(PRIMARY_FOREGROUND).bg(PRIMARY),
            ButtonVariant::Destructive => Style::default().fg(PRIMARY).bg(DESTRUCTIVE),
            ButtonVariant::Outline => Style::default().fg(TEXT),
            ButtonVariant::Secondary => Style::default().fg(TEXT).bg(SECONDARY),
            ButtonVariant::Ghost => Style::default().fg(TEXT),
            ButtonVariant::Link => Style::default().fg(TEXT).add_modifier(Modifier::UNDERLINED),
        };

        if !focused {
            return base;
        }
        match self.variant {
            ButtonVariant::Outline | ButtonVariant::Ghost => {
                base.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD)
            }
            ButtonVariant::Link => base.fg(FOCUS_RING).add_modifier(Modifier::BOLD),
            _ => base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        }
    }

    fn text(&self) -> String {
        let pad = " ".repeat(self.size.padding() as usize);
        match (self.variant, self.size) {
            (_, ButtonSize::Icon) => format!(" {} ", self.label),
            (ButtonVariant::Link, _) => self.label.to_string(),
            (ButtonVariant::Outline, _) => format!("[{pad}{}{pad}]", self.label),
            _ => format!("{pad}{}{pad}", self.label),
        }
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let area = Rect {
            width: self.width().min(area.width),
            height: 1,
            ..area
        };
        let focused = match &self.handle {
            Some(handle) => {
                handle.record(area);
                handle.is_focused()
            }
            None => false,
        };

        let style = self.style(focused);
        if self.variant != ButtonVariant::Link {
            buf.set_style(area, style);
        }
        buf.set_stringn(area.x, area.y, self.text(), area.width as usize, style);
    }
}

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::ui::components::button::{Button, ButtonVariant};
use crate::ui::components::dialog::{Dialog, DialogLayout, Modality, ModalState};
use crate::ui::components::ElementHandle;
use crate::ui::theme::TEXT;

/// Focus index of the cancel button inside an alert dialog.
pub const CANCEL_INDEX: usize = 0;
/// Focus index of the action button.
pub const ACTION_INDEX: usize = 1;

/// Confirmation dialog with a cancel and a destructive action button.
///
/// Focus starts on cancel. Escape cancels; outside clicks are ignored.
pub struct AlertDialog<'a> {
    modal: &'a ModalState,
    title: &'a str,
    description: Option<&'a str>,
    cancel_label: &'a str,
    action_label: &'a str,
    handle: Option<ElementHandle>,
    cancel_handle: ElementHandle,
    action_handle: ElementHandle,
}

impl<'a> AlertDialog<'a> {
    pub fn new(modal: &'a ModalState, title: &'a str) -> Self {
        Self {
            modal,
            title,
            description: None,
            cancel_label: "Cancel",
            action_label: "Continue",
            handle: None,
            cancel_handle: ElementHandle::new(),
            action_handle: ElementHandle::new(),
        }
    }

    /// Two focusable buttons, alert dismissal rules.
    pub fn modal_state() -> ModalState {
        ModalState::alert(2)
    }

    pub fn description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn cancel_label(mut self, label: &'a str) -> Self {
        self.cancel_label = label;
        self
    }

    pub fn action_label(mut self, label: &'a str) -> Self {
        self.action_label = label;
        self
    }

    pub fn handle(mut self, handle: &ElementHandle) -> Self {
        self.handle = Some(handle.clone());
        self
    }

    pub fn cancel_handle(mut self, handle: &ElementHandle) -> Self {
        self.cancel_handle = handle.clone();
        self
    }

    pub fn action_handle(mut self, handle: &ElementHandle) -> Self {
        self.action_handle = handle.clone();
        self
    }

    fn dialog(&self) -> Dialog<'a> {
        let width = (self.title.chars().count() as u16 + 8).max(44);
        let mut dialog = Dialog::new(self.title)
            .size(width, 8)
            .modality(Modality::Alert);
        if let Some(handle) = &self.handle {
            dialog = dialog.handle(handle);
        }
        dialog
    }

    pub fn layout(&self, bounds: Rect) -> DialogLayout {
        self.dialog().layout(bounds)
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, bounds: Rect, buf: &mut Buffer) {
        if !self.modal.is_open() {
            self.cancel_handle.forget();
            self.action_handle.forget();
            return;
        }
        let dialog = self.dialog();
        let layout = dialog.layout(bounds);
        dialog.render(bounds, buf);

        if let Some(description) = self.description {
            Paragraph::new(description)
                .style(Style::default().fg(TEXT))
                .wrap(Wrap { trim: true })
                .render(layout.body, buf);
        }

        for (index, handle) in [(CANCEL_INDEX, &self.cancel_handle), (ACTION_INDEX, &self.action_handle)] {
            if self.modal.focus() == index {
                handle.focus();
            } else {
                handle.blur();
            }
        }

        let cancel = Button::new(self.cancel_label)
            .variant(ButtonVariant::Outline)
            .handle(&self.cancel_handle);
        let action = Button::new(self.action_label)
            .variant(ButtonVariant::Destructive)
            .handle(&self.action_handle);
        let footer = layout.footer;
        let action_x = footer.right().saturating_sub(action.width()).max(footer.x);
        let cancel_x = action_x.saturating_sub(cancel.width() + 1).max(footer.x);
        cancel.render(
            Rect {
                x: cancel_x,
                width: action_x.saturating_sub(cancel_x),
                ..footer
            },
            buf,
        );
        action.render(
            Rect {
                x: action_x,
                width: footer.right().saturating_sub(action_x),
                ..footer
            },
            buf,
        );
    }
}

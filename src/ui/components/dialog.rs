//! Modal dialog primitive.
//!
//! [`ModalState`] carries the behaviour shared by dialogs and alert dialogs:
//! open/close, focus containment and dismissal. [`Dialog`] draws the frame;
//! callers draw their own content into [`DialogLayout::body`] and
//! [`DialogLayout::footer`].

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Widget};

use crate::ui::components::ElementHandle;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{FOCUS_RING, MUTED_TEXT, PANEL_BORDER, TEXT};

/// Dismissal rules of a modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Modality {
    /// Closed by Escape, the close button, or a click outside.
    #[default]
    Dialog,
    /// Requires an explicit answer. Outside clicks are ignored and Escape
    /// acts as cancel.
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    Escape,
    OutsideClick,
    CloseButton,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalState {
    modality: Modality,
    open: bool,
    focus: usize,
    focusables: usize,
}

impl ModalState {
    /// Dialog cycling focus over `focusables` elements.
    pub fn dialog(focusables: usize) -> Self {
        Self {
            modality: Modality::Dialog,
            open: false,
            focus: 0,
            focusables,
        }
    }

    pub fn alert(focusables: usize) -> Self {
        Self {
            modality: Modality::Alert,
            ..Self::dialog(focusables)
        }
    }

    pub fn modality(&self) -> Modality {
        self.modality
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Index of the focused element inside the dialog.
    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Open with focus on the first element.
    pub fn open(&mut self) {
        self.open = true;
        self.focus = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn set_focus(&mut self, index: usize) {
        if index < self.focusables {
            self.focus = index;
        }
    }

    /// Tab: next element, wrapping back to the first.
    pub fn focus_next(&mut self) {
        if self.focusables > 0 {
            self.focus = (self.focus + 1) % self.focusables;
        }
    }

    /// BackTab: previous element, wrapping to the last.
    pub fn focus_prev(&mut self) {
        if self.focusables > 0 {
            self.focus = (self.focus + self.focusables - 1) % self.focusables;
        }
    }

    /// Apply a dismissal request. Returns true if the modal closed.
    pub fn dismiss(&mut self, reason: DismissReason) -> bool {
        if !self.open {
            return false;
        }
        let allowed = match (self.modality, reason) {
            (_, DismissReason::Escape) => true,
            (Modality::Dialog, _) => true,
            (Modality::Alert, _) => false,
        };
        if allowed {
            self.close();
        }
        allowed
    }
}

/// Regions of a dialog placed within some bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogLayout {
    /// Whole dialog, borders included.
    pub area: Rect,
    /// Between the header and the footer.
    pub body: Rect,
    /// Last inner row, for action buttons.
    pub footer: Rect,
    /// Close "×" cell on the top border, if the dialog has one.
    pub close: Option<Rect>,
}

/// Centered modal frame with title, description and an optional close button.
pub struct Dialog<'a> {
    title: &'a str,
    description: Option<&'a str>,
    width: u16,
    height: u16,
    modality: Modality,
    handle: Option<ElementHandle>,
    close_handle: Option<ElementHandle>,
}

impl<'a> Dialog<'a> {
    pub fn new(title: &'a str) -> Self {
        Self {
            title,
            description: None,
            width: 48,
            height: 10,
            modality: Modality::Dialog,
            handle: None,
            close_handle: None,
        }
    }

    pub fn description(mut self, description: &'a str) -> Self {
        self.description = Some(description);
        self
    }

    pub fn size(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Alert dialogs have no close button.
    pub fn modality(mut self, modality: Modality) -> Self {
        self.modality = modality;
        self
    }

    /// Records the dialog area, for outside-click detection.
    pub fn handle(mut self, handle: &ElementHandle) -> Self {
        self.handle = Some(handle.clone());
        self
    }

    pub fn close_handle(mut self, handle: &ElementHandle) -> Self {
        self.close_handle = Some(handle.clone());
        self
    }

    fn header_rows(&self) -> u16 {
        // title, optional description, blank line
        1 + u16::from(self.description.is_some()) + 1
    }

    pub fn layout(&self, bounds: Rect) -> DialogLayout {
        let area = centered_rect_by_size(bounds, self.width, self.height);
        let inner = Rect {
            x: area.x.saturating_add(2),
            y: area.y.saturating_add(1),
            width: area.width.saturating_sub(4),
            height: area.height.saturating_sub(2),
        };
        let header = self.header_rows().min(inner.height);
        let footer_height = u16::from(inner.height > header);
        let footer = Rect {
            y: inner.bottom().saturating_sub(footer_height),
            height: footer_height,
            ..inner
        };
        let body = Rect {
            y: inner.y + header,
            height: inner.height.saturating_sub(header + footer_height),
            ..inner
        };
        let close = (self.modality == Modality::Dialog && area.width >= 4)
            .then(|| Rect::new(area.right() - 3, area.y, 1, 1));
        DialogLayout {
            area,
            body,
            footer,
            close,
        }
    }
}

impl Widget for Dialog<'_> {
    /// `area` is the bounds the dialog is centered in; everything outside
    /// the dialog itself is dimmed.
    fn render(self, bounds: Rect, buf: &mut Buffer) {
        let layout = self.layout(bounds);
        buf.set_style(bounds, Style::default().add_modifier(Modifier::DIM));
        Clear.render(layout.area, buf);
        if let Some(handle) = &self.handle {
            handle.record(layout.area);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(PANEL_BORDER));
        block.render(layout.area, buf);

        let inner_width = layout.area.width.saturating_sub(4) as usize;
        let x = layout.area.x + 2;
        let mut y = layout.area.y + 1;
        if y < layout.body.y {
            buf.set_stringn(
                x,
                y,
                self.title,
                inner_width,
                Style::default().fg(TEXT).add_modifier(Modifier::BOLD),
            );
            y += 1;
        }
        if let Some(description) = self.description {
            if y < layout.body.y {
                buf.set_stringn(x, y, description, inner_width, Style::default().fg(MUTED_TEXT));
            }
        }

        if let Some(close) = layout.close {
            let focused = match &self.close_handle {
                Some(handle) => {
                    handle.record(close);
                    handle.is_focused()
                }
                None => false,
            };
            let style = if focused {
                Style::default().fg(FOCUS_RING).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(MUTED_TEXT)
            };
            buf.set_string(close.x, close.y, "×", style);
        } else if let Some(handle) = &self.close_handle {
            handle.forget();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::testing::{buffer_text, row_text};

    #[test]
    fn focus_wraps_both_ways() {
        let mut modal = ModalState::dialog(3);
        modal.open();
        assert_eq!(modal.focus(), 0);
        modal.focus_prev();
        assert_eq!(modal.focus(), 2);
        modal.focus_next();
        assert_eq!(modal.focus(), 0);
        modal.focus_next();
        modal.focus_next();
        modal.focus_next();
        assert_eq!(modal.focus(), 0);
    }

    #[test]
    fn reopening_resets_focus() {
        let mut modal = ModalState::dialog(2);
        modal.open();
        modal.focus_next();
        modal.close();
        modal.open();
        assert_eq!(modal.focus(), 0);
    }

    #[test]
    fn set_focus_ignores_out_of_range() {
        let mut modal = ModalState::alert(2);
        modal.set_focus(1);
        assert_eq!(modal.focus(), 1);
        modal.set_focus(5);
        assert_eq!(modal.focus(), 1);
    }

    #[test]
    fn dialog_dismisses_on_any_reason() {
        for reason in [
            DismissReason::Escape,
            DismissReason::OutsideClick,
            DismissReason::CloseButton,
        ] {
            let mut modal = ModalState::dialog(1);
            modal.open();
            assert!(modal.dismiss(reason), "{reason:?}");
            assert!(!modal.is_open());
        }
    }

    #[test]
    fn alert_only_dismisses_on_escape() {
        let mut modal = ModalState::alert(2);
        modal.open();
        assert!(!modal.dismiss(DismissReason::OutsideClick));
        assert!(modal.is_open());
        assert!(modal.dismiss(DismissReason::Escape));
        assert!(!modal.is_open());
    }

    #[test]
    fn closed_modal_ignores_dismiss() {
        let mut modal = ModalState::dialog(1);
        assert!(!modal.dismiss(DismissReason::Escape));
    }

    #[test]
    fn layout_splits_header_body_footer() {
        let dialog = Dialog::new("Options").description("Lookup settings").size(40, 10);
        let layout = dialog.layout(Rect::new(0, 0, 80, 20));
        assert_eq!(layout.area, Rect::new(20, 5, 40, 10));
        // inner starts at y=6; title, description, blank
        assert_eq!(layout.body.y, 9);
        assert_eq!(layout.footer, Rect::new(22, 13, 36, 1));
        assert_eq!(layout.body.height, 4);
        assert_eq!(layout.close, Some(Rect::new(57, 5, 1, 1)));
    }

    #[test]
    fn alert_layout_has_no_close_button() {
        let dialog = Dialog::new("Quit?").modality(Modality::Alert);
        assert_eq!(dialog.layout(Rect::new(0, 0, 80, 24)).close, None);
    }

    #[test]
    fn renders_title_description_and_close() {
        let bounds = Rect::new(0, 0, 60, 16);
        let mut buf = Buffer::empty(bounds);
        let handle = ElementHandle::new();
        Dialog::new("Options")
            .description("Lookup settings")
            .size(40, 10)
            .handle(&handle)
            .render(bounds, &mut buf);

        let text = buffer_text(&buf);
        assert!(text.contains("Options"));
        assert!(text.contains("Lookup settings"));
        assert!(row_text(&buf, 3).contains('×'));
        assert_eq!(handle.area(), Some(Rect::new(10, 3, 40, 10)));
    }
}

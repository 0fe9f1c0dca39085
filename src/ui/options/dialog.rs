use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

use crate::ui::components::{
    Button, Checkbox, Dialog, ElementHandle, Select, SelectContent,
};
use crate::ui::options::state::{OptionsDialogState, OptionsField};
use crate::ui::theme::MUTED_TEXT;

const DIALOG_WIDTH: u16 = 44;
const DIALOG_HEIGHT: u16 = 11;
const LABEL_WIDTH: u16 = 8;

/// Handles of the dialog frame and its focusable elements, kept by `App`
/// for mouse hit testing.
#[derive(Debug, Clone, Default)]
pub struct OptionsHandles {
    pub dialog: ElementHandle,
    pub close: ElementHandle,
    pub plot: ElementHandle,
    /// Open plot list; drawn over the fields below the trigger.
    pub plot_list: ElementHandle,
    pub movies_only: ElementHandle,
    pub apply: ElementHandle,
}

impl OptionsHandles {
    /// Field under the cell `(column, row)`, if any.
    pub fn field_at(&self, column: u16, row: u16) -> Option<OptionsField> {
        OptionsField::ALL
            .into_iter()
            .find(|field| self.field(*field).contains(column, row))
    }

    fn field(&self, field: OptionsField) -> &ElementHandle {
        match field {
            OptionsField::Plot => &self.plot,
            OptionsField::MoviesOnly => &self.movies_only,
            OptionsField::Apply => &self.apply,
        }
    }

    fn forget_all(&self) {
        for handle in [
            &self.dialog,
            &self.close,
            &self.plot,
            &self.plot_list,
            &self.movies_only,
            &self.apply,
        ] {
            handle.forget();
        }
    }
}

/// Modal with the plot-length select, the movies-only checkbox and an
/// Apply button.
pub struct OptionsDialog<'a> {
    state: &'a OptionsDialogState,
    handles: &'a OptionsHandles,
}

impl<'a> OptionsDialog<'a> {
    pub fn new(state: &'a OptionsDialogState, handles: &'a OptionsHandles) -> Self {
        Self { state, handles }
    }
}

impl Widget for OptionsDialog<'_> {
    fn render(self, bounds: Rect, buf: &mut Buffer) {
        let OptionsDialogState::Visible {
            plot, movies_only, ..
        } = self.state
        else {
            self.handles.forget_all();
            return;
        };

        let focused = self.state.focused_field();
        for field in OptionsField::ALL {
            let handle = self.handles.field(field);
            if focused == Some(field) {
                handle.focus();
            } else {
                handle.blur();
            }
        }

        let dialog = Dialog::new("Search options")
            .description("Applied to the next search")
            .size(DIALOG_WIDTH, DIALOG_HEIGHT)
            .handle(&self.handles.dialog)
            .close_handle(&self.handles.close);
        let layout = dialog.layout(bounds);
        dialog.render(bounds, buf);

        let body = layout.body;
        if body.height < 3 {
            return;
        }
        let label_style = Style::default().fg(MUTED_TEXT);
        buf.set_stringn(body.x, body.y, "Plot", LABEL_WIDTH as usize, label_style);
        let trigger = Rect {
            x: body.x + LABEL_WIDTH,
            y: body.y,
            width: body.width.saturating_sub(LABEL_WIDTH).min(16),
            height: 1,
        };
        Select::new(plot)
            .handle(&self.handles.plot)
            .render(trigger, buf);

        Checkbox::new(movies_only, "Movies only")
            .handle(&self.handles.movies_only)
            .render(
                Rect {
                    y: body.y + 2,
                    height: 1,
                    ..body
                },
                buf,
            );

        let apply = Button::new("Apply").handle(&self.handles.apply);
        let apply_width = apply.width().min(layout.footer.width);
        apply.render(
            Rect {
                x: layout.footer.right() - apply_width,
                width: apply_width,
                ..layout.footer
            },
            buf,
        );

        // Drawn last so the open list covers the fields below it.
        let content = SelectContent::new(plot).handle(&self.handles.plot_list);
        if plot.is_open() {
            let top = trigger.y + 1;
            let height = content
                .desired_height()
                .min(bounds.bottom().saturating_sub(top));
            content.render(
                Rect {
                    y: top,
                    height,
                    ..trigger
                },
                buf,
            );
        } else {
            content.render(Rect::default(), buf);
        }
    }
}

use ratatui::buffer::Buffer;
use ratatui::layout::{Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Widget};

use crate::ui::components::ElementHandle;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, FOCUS_RING, MUTED_TEXT, PANEL_BORDER, TEXT};

const SCROLL_UP: &str = "▲";
const SCROLL_DOWN: &str = "▼";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectItem {
    /// Non-selectable group heading.
    Label(String),
    Option { value: String, label: String },
    Separator,
}

impl SelectItem {
    pub fn option(value: impl Into<String>, label: impl Into<String>) -> Self {
        SelectItem::Option {
            value: value.into(),
            label: label.into(),
        }
    }

    pub fn label(text: impl Into<String>) -> Self {
        SelectItem::Label(text.into())
    }

    fn is_option(&self) -> bool {
        matches!(self, SelectItem::Option { .. })
    }
}

/// Selection, highlight and open/closed state of a select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectState {
    items: Vec<SelectItem>,
    selected: Option<usize>,
    highlighted: Option<usize>,
    open: bool,
}

impl SelectState {
    pub fn new(items: Vec<SelectItem>) -> Self {
        Self {
            items,
            selected: None,
            highlighted: None,
            open: false,
        }
    }

    /// Preselect the option whose value is `value`; unknown values are ignored.
    pub fn with_selected_value(mut self, value: &str) -> Self {
        self.selected = self.position_of(value);
        self
    }

    pub fn items(&self) -> &[SelectItem] {
        &self.items
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    pub fn selected_value(&self) -> Option<&str> {
        match self.items.get(self.selected?)? {
            SelectItem::Option { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn selected_label(&self) -> Option<&str> {
        match self.items.get(self.selected?)? {
            SelectItem::Option { label, .. } => Some(label),
            _ => None,
        }
    }

    /// Open the list with the highlight on the current selection, or on the
    /// first option when nothing is selected.
    pub fn open(&mut self) {
        self.open = true;
        self.highlighted = self
            .selected
            .or_else(|| self.items.iter().position(SelectItem::is_option));
    }

    pub fn close(&mut self) {
        self.open = false;
        self.highlighted = None;
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Move the highlight to the next option. Stops at the last one.
    pub fn highlight_next(&mut self) {
        let Some(current) = self.highlighted else {
            return;
        };
        if let Some(next) = (current + 1..self.items.len()).find(|&i| self.items[i].is_option()) {
            self.highlighted = Some(next);
        }
    }

    /// Move the highlight to the previous option. Stops at the first one.
    pub fn highlight_prev(&mut self) {
        let Some(current) = self.highlighted else {
            return;
        };
        if let Some(prev) = (0..current).rev().find(|&i| self.items[i].is_option()) {
            self.highlighted = Some(prev);
        }
    }

    /// Select the highlighted option and close. Returns the new value.
    pub fn commit(&mut self) -> Option<&str> {
        if !self.open {
            return None;
        }
        let highlighted = self.highlighted;
        self.close();
        self.selected = highlighted.filter(|&i| self.items[i].is_option());
        self.selected_value()
    }

    /// Highlight option `index` and commit it, as a click on that row does.
    /// Ignored when the list is closed or `index` is not an option.
    pub fn pick(&mut self, index: usize) -> Option<&str> {
        if !self.open || !self.items.get(index).is_some_and(SelectItem::is_option) {
            return None;
        }
        self.highlighted = Some(index);
        self.commit()
    }

    /// Option shown on screen row `row` of a list rendered into `list_area`
    /// by [`SelectContent`].
    pub fn item_at(&self, list_area: Rect, row: u16) -> Option<usize> {
        let inner = list_area.inner(Margin::new(1, 1));
        if !self.open || inner.is_empty() || row < inner.y || row >= inner.bottom() {
            return None;
        }
        let (start, end, first_row) = self.list_window(inner);
        let index = start + usize::from(row.checked_sub(first_row)?);
        (index < end && self.items[index].is_option()).then_some(index)
    }

    /// Visible item range and the row of its first item inside `inner`.
    fn list_window(&self, inner: Rect) -> (usize, usize, u16) {
        let rows = inner.height as usize;
        let (start, end) = visible_window(self.items.len(), self.highlighted, rows);
        let overflow = self.items.len() > rows;
        (start, end, inner.y + u16::from(overflow))
    }

    fn position_of(&self, value: &str) -> Option<usize> {
        self.items.iter().position(|item| {
            matches!(item, SelectItem::Option { value: v, .. } if v == value)
        })
    }
}

/// Range of item indices shown in `rows` rows, keeping `highlighted` in view.
///
/// When the items do not fit, the first and last rows are reserved for the
/// scroll buttons and only `rows - 2` items are listed.
pub fn visible_window(len: usize, highlighted: Option<usize>, rows: usize) -> (usize, usize) {
    if len <= rows {
        return (0, len);
    }
    let capacity = rows.saturating_sub(2).max(1);
    let focus = highlighted.unwrap_or(0).min(len - 1);
    let start = focus.saturating_sub(capacity - 1).min(len - capacity);
    (start, start + capacity)
}

/// Closed select: shows the current value and a chevron.
pub struct Select<'a> {
    state: &'a SelectState,
    placeholder: &'a str,
    handle: Option<ElementHandle>,
}

impl<'a> Select<'a> {
    pub fn new(state: &'a SelectState) -> Self {
        Self {
            state,
            placeholder: "Select...",
            handle: None,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn handle(mut self, handle: &ElementHandle) -> Self {
        self.handle = Some(handle.clone());
        self
    }
}

impl Widget for Select<'_> {
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

        let (text, mut style) = match self.state.selected_label() {
            Some(label) => (label, Style::default().fg(TEXT)),
            None => (self.placeholder, Style::default().fg(MUTED_TEXT)),
        };
        if focused {
            style = style.bg(ACTIVE_HIGHLIGHT).add_modifier(Modifier::BOLD);
            buf.set_style(area, Style::default().bg(ACTIVE_HIGHLIGHT));
        }

        let chevron = if self.state.is_open() { "▴" } else { "▾" };
        let width = area.width as usize;
        buf.set_stringn(area.x, area.y, text, width.saturating_sub(2), style);
        if area.width >= 2 {
            buf.set_string(area.right() - 1, area.y, chevron, style.fg(MUTED_TEXT));
        }
    }
}

/// Open select list, drawn as a popup over whatever is below it.
pub struct SelectContent<'a> {
    state: &'a SelectState,
    handle: Option<ElementHandle>,
}

impl<'a> SelectContent<'a> {
    pub fn new(state: &'a SelectState) -> Self {
        Self {
            state,
            handle: None,
        }
    }

    /// Records the popup area while open; forgets it while closed.
    pub fn handle(mut self, handle: &ElementHandle) -> Self {
        self.handle = Some(handle.clone());
        self
    }

    /// Rows the popup needs to show every item, borders included.
    pub fn desired_height(&self) -> u16 {
        self.state.items().len() as u16 + 2
    }
}

impl Widget for SelectContent<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.state.is_open() {
            if let Some(handle) = &self.handle {
                handle.forget();
            }
            return;
        }
        if let Some(handle) = &self.handle {
            handle.record(area);
        }
        Clear.render(area, buf);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(PANEL_BORDER));
        let inner = block.inner(area);
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let items = self.state.items();
        let (start, end, mut y) = self.state.list_window(inner);
        let overflow = items.len() > inner.height as usize;
        let width = inner.width as usize;

        if overflow && start > 0 {
            buf.set_stringn(inner.x, inner.y, SCROLL_UP, width, Style::default().fg(MUTED_TEXT));
        }

        for (index, item) in items.iter().enumerate().take(end).skip(start) {
            let row = Rect::new(inner.x, y, inner.width, 1);
            match item {
                SelectItem::Label(text) => {
                    buf.set_stringn(
                        row.x,
                        row.y,
                        text,
                        width,
                        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD),
                    );
                }
                SelectItem::Separator => {
                    buf.set_stringn(
                        row.x,
                        row.y,
                        "─".repeat(width),
                        width,
                        Style::default().fg(PANEL_BORDER),
                    );
                }
                SelectItem::Option { label, .. } => {
                    let highlighted = self.state.highlighted == Some(index);
                    let selected = self.state.selected == Some(index);
                    let marker = if selected { "✓ " } else { "  " };
                    let style = if highlighted {
                        buf.set_style(row, Style::default().bg(ACTIVE_HIGHLIGHT));
                        Style::default()
                            .fg(FOCUS_RING)
                            .bg(ACTIVE_HIGHLIGHT)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(TEXT)
                    };
                    buf.set_stringn(row.x, row.y, format!("{marker}{label}"), width, style);
                }
            }
            y += 1;
        }

        if overflow && end < items.len() {
            buf.set_stringn(
                inner.x,
                inner.bottom() - 1,
                SCROLL_DOWN,
                width,
                Style::default().fg(MUTED_TEXT),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::testing::{buffer_text, row_text};

    fn plot_select() -> SelectState {
        SelectState::new(vec![
            SelectItem::label("Plot"),
            SelectItem::option("short", "Short"),
            SelectItem::Separator,
            SelectItem::option("full", "Full"),
        ])
    }

    #[test]
    fn open_highlights_selection_or_first_option() {
        let mut state = plot_select();
        state.open();
        assert_eq!(state.highlighted(), Some(1));

        let mut state = plot_select().with_selected_value("full");
        state.open();
        assert_eq!(state.highlighted(), Some(3));
    }

    #[test]
    fn highlight_skips_labels_and_separators_without_wrapping() {
        let mut state = plot_select();
        state.open();
        state.highlight_next();
        assert_eq!(state.highlighted(), Some(3));
        state.highlight_next();
        assert_eq!(state.highlighted(), Some(3));
        state.highlight_prev();
        assert_eq!(state.highlighted(), Some(1));
        state.highlight_prev();
        assert_eq!(state.highlighted(), Some(1));
    }

    #[test]
    fn commit_selects_and_closes() {
        let mut state = plot_select().with_selected_value("short");
        state.open();
        state.highlight_next();
        assert_eq!(state.commit(), Some("full"));
        assert!(!state.is_open());
        assert_eq!(state.selected_value(), Some("full"));
        assert_eq!(state.selected_label(), Some("Full"));
    }

    #[test]
    fn commit_when_closed_is_noop() {
        let mut state = plot_select().with_selected_value("short");
        assert_eq!(state.commit(), None);
        assert_eq!(state.selected_value(), Some("short"));
    }

    #[test]
    fn close_keeps_selection() {
        let mut state = plot_select().with_selected_value("short");
        state.toggle();
        state.highlight_next();
        state.toggle();
        assert!(!state.is_open());
        assert_eq!(state.selected_value(), Some("short"));
    }

    #[test]
    fn unknown_preselect_is_ignored() {
        let state = plot_select().with_selected_value("medium");
        assert_eq!(state.selected_value(), None);
    }

    #[test]
    fn window_follows_highlight() {
        assert_eq!(visible_window(3, Some(2), 5), (0, 3));
        assert_eq!(visible_window(10, Some(0), 5), (0, 3));
        assert_eq!(visible_window(10, Some(4), 5), (2, 5));
        assert_eq!(visible_window(10, Some(9), 5), (7, 10));
    }

    #[test]
    fn trigger_shows_label_or_placeholder() {
        let area = Rect::new(0, 0, 12, 1);
        let mut buf = Buffer::empty(area);
        Select::new(&plot_select()).render(area, &mut buf);
        assert!(row_text(&buf, 0).starts_with("Select..."));

        let mut buf = Buffer::empty(area);
        Select::new(&plot_select().with_selected_value("full")).render(area, &mut buf);
        assert!(row_text(&buf, 0).starts_with("Full"));
        assert!(row_text(&buf, 0).ends_with('▾'));
    }

    #[test]
    fn content_renders_scroll_buttons_when_overflowing() {
        let items = (0..8)
            .map(|i| SelectItem::option(i.to_string(), format!("Item {i}")))
            .collect();
        let mut state = SelectState::new(items);
        state.open();
        for _ in 0..5 {
            state.highlight_next();
        }

        let area = Rect::new(0, 0, 14, 7);
        let mut buf = Buffer::empty(area);
        SelectContent::new(&state).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains(SCROLL_UP));
        assert!(text.contains(SCROLL_DOWN));
        assert!(text.contains("Item 5"));
        assert!(!text.contains("Item 0"));
    }

    #[test]
    fn pick_commits_only_options_of_an_open_list() {
        let mut state = plot_select().with_selected_value("short");
        assert_eq!(state.pick(3), None);

        state.open();
        assert_eq!(state.pick(2), None);
        assert!(state.is_open());
        assert_eq!(state.pick(3), Some("full"));
        assert!(!state.is_open());
        assert_eq!(state.selected_value(), Some("full"));
    }

    #[test]
    fn item_at_maps_rendered_rows() {
        let mut state = plot_select();
        state.open();
        let area = Rect::new(4, 2, 12, 6);
        let handle = ElementHandle::new();
        let mut buf = Buffer::empty(Rect::new(0, 0, 20, 10));
        SelectContent::new(&state).handle(&handle).render(area, &mut buf);
        assert_eq!(handle.area(), Some(area));

        // Border, label, option, separator, option, border.
        assert_eq!(state.item_at(area, 2), None);
        assert_eq!(state.item_at(area, 3), None);
        assert_eq!(state.item_at(area, 4), Some(1));
        assert!(row_text(&buf, 4).contains("Short"));
        assert_eq!(state.item_at(area, 5), None);
        assert_eq!(state.item_at(area, 6), Some(3));
        assert!(row_text(&buf, 6).contains("Full"));
        assert_eq!(state.item_at(area, 7), None);
    }

    #[test]
    fn item_at_accounts_for_scroll_buttons() {
        let items = (0..8)
            .map(|i| SelectItem::option(i.to_string(), format!("Item {i}")))
            .collect();
        let mut state = SelectState::new(items);
        state.open();
        for _ in 0..5 {
            state.highlight_next();
        }
        let area = Rect::new(0, 0, 14, 7);
        let mut buf = Buffer::empty(area);
        SelectContent::new(&state).render(area, &mut buf);

        // Row 1 is the scroll-up button; rows 2..=4 list items 3..=5.
        assert_eq!(state.item_at(area, 1), None);
        assert_eq!(state.item_at(area, 2), Some(3));
        assert!(row_text(&buf, 2).contains("Item 3"));
        assert_eq!(state.item_at(area, 4), Some(5));
        assert_eq!(state.item_at(area, 5), None);
    }

    #[test]
    fn closed_content_forgets_handle() {
        let mut state = plot_select();
        state.open();
        let area = Rect::new(0, 0, 10, 6);
        let handle = ElementHandle::new();
        let mut buf = Buffer::empty(area);
        SelectContent::new(&state).handle(&handle).render(area, &mut buf);
        assert!(handle.area().is_some());

        state.close();
        SelectContent::new(&state).handle(&handle).render(area, &mut buf);
        assert_eq!(handle.area(), None);
        assert_eq!(state.item_at(area, 2), None);
    }

    #[test]
    fn closed_content_draws_nothing() {
        let area = Rect::new(0, 0, 10, 4);
        let mut buf = Buffer::empty(area);
        SelectContent::new(&plot_select()).render(area, &mut buf);
        assert_eq!(buffer_text(&buf).trim(), "");
    }
}

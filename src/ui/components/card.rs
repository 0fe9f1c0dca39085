use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap};

use crate::ui::components::ElementHandle;
use crate::ui::theme::{MUTED_TEXT, PANEL_BORDER, TEXT};

/// Bordered panel with header (title + description), content and footer.
#[derive(Default)]
pub struct Card<'a> {
    title: Option<Line<'a>>,
    description: Option<Line<'a>>,
    content: Vec<Line<'a>>,
    footer: Option<Line<'a>>,
    alignment: Alignment,
    handle: Option<ElementHandle>,
}

impl<'a> Card<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<Line<'a>>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<Line<'a>>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn content(mut self, content: Vec<Line<'a>>) -> Self {
        self.content = content;
        self
    }

    pub fn footer(mut self, footer: impl Into<Line<'a>>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub fn handle(mut self, handle: &ElementHandle) -> Self {
        self.handle = Some(handle.clone());
        self
    }

    fn header_lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();
        if let Some(title) = &self.title {
            lines.push(
                title
                    .clone()
                    .patch_style(Style::default().fg(TEXT).add_modifier(Modifier::BOLD)),
            );
        }
        if let Some(description) = &self.description {
            lines.push(description.clone().patch_style(
                Style::default()
                    .fg(MUTED_TEXT)
                    .add_modifier(Modifier::ITALIC),
            ));
        }
        lines
    }
}

impl Widget for Card<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Some(handle) = &self.handle {
            handle.record(area);
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(PANEL_BORDER));
        let inner = block.inner(area).inner(Margin {
            horizontal: 1,
            vertical: 0,
        });
        block.render(area, buf);
        if inner.is_empty() {
            return;
        }

        let header = self.header_lines();
        let header_height = (header.len() as u16).min(inner.height);
        let header_paragraph = Paragraph::new(header).alignment(self.alignment);
        let footer_height = u16::from(self.footer.is_some());
        let gap = u16::from(header_height > 0 && !self.content.is_empty());

        let [header_area, _, content_area, footer_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height),
                Constraint::Length(gap),
                Constraint::Min(0),
                Constraint::Length(footer_height),
            ])
            .areas(inner);

        header_paragraph.render(header_area, buf);
        Paragraph::new(self.content)
            .alignment(self.alignment)
            .style(Style::default().fg(TEXT))
            .wrap(Wrap { trim: true })
            .render(content_area, buf);
        if let Some(footer) = self.footer {
            Paragraph::new(footer)
                .alignment(self.alignment)
                .style(Style::default().fg(MUTED_TEXT))
                .render(footer_area, buf);
        }
    }
}

use crate::ui::theme::{GLOBAL_BORDER, MUTED_TEXT, TEXT};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Which key hints the footer shows.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FooterHints {
    Search,
    Options,
    QuitPrompt,
}

impl FooterHints {
    fn pairs(self) -> &'static [(&'static str, &'static str)] {
        match self {
            FooterHints::Search => &[
                ("Enter", "Search"),
                ("Tab", "Focus"),
                ("Ctrl+O", "Options"),
                ("Esc", "Quit"),
            ],
            FooterHints::Options => &[
                ("Tab", "Next"),
                ("↑↓", "Choose"),
                ("Enter", "Select"),
                ("Esc", "Close"),
            ],
            FooterHints::QuitPrompt => &[("←→", "Choose"), ("Enter", "Confirm"), ("Esc", "Cancel")],
        }
    }
}

/// Bottom bar: key hints on the left, crate version on the right.
pub struct Footer {
    hints: FooterHints,
}

impl Footer {
    pub fn new(hints: FooterHints) -> Self {
        Self { hints }
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let key_style = Style::default().fg(TEXT).add_modifier(Modifier::BOLD);
        let text_style = Style::default().fg(MUTED_TEXT);

        let mut spans = vec![Span::raw(" ")];
        for (i, (key, action)) in self.hints.pairs().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", text_style));
            }
            spans.push(Span::styled(*key, key_style));
            spans.push(Span::styled(format!(": {action}"), text_style));
        }

        let version = format!("v{VERSION} ");
        // Char count, not bytes: the separators are multi-byte.
        let used: usize = spans.iter().map(|s| s.content.chars().count()).sum();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(used)
            .saturating_sub(version.chars().count());
        spans.push(Span::raw(" ".repeat(padding)));
        spans.push(Span::styled(version, text_style.add_modifier(Modifier::DIM)));

        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
            .render(area, buf);
    }
}

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use super::state::{SearchState, SearchStatus};
use crate::omdb::MovieDetails;
use crate::ui::components::{Button, Card, ElementHandle, Input, InputState, INPUT_HEIGHT};
use crate::ui::layout::centered_column;
use crate::ui::theme::{ACCENT_RED, MUTED_TEXT, RATING_STAR, TEXT};

pub const HEADING: &str = "Movie Search";
pub const SUBHEADING: &str = "Search for movies";
pub const INPUT_PLACEHOLDER: &str = "Enter movie name";
pub const SEARCH_LABEL: &str = "Search";
pub const LOADING_TEXT: &str = "Searching...";
pub const ERROR_SUFFIX: &str = ". Please try searching for another movie.";

const PANEL_WIDTH: u16 = 64;
const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Text shown for a failed lookup.
pub fn error_text(message: &str) -> String {
    format!("{message}{ERROR_SUFFIX}")
}

fn spinner(tick: u64) -> &'static str {
    SPINNER_FRAMES[(tick % SPINNER_FRAMES.len() as u64) as usize]
}

/// The search screen: heading, query field with search button, and one
/// status block (spinner, error or movie card) depending on the state.
pub struct SearchView<'a> {
    state: &'a SearchState,
    input: &'a InputState,
    input_handle: &'a ElementHandle,
    button_handle: &'a ElementHandle,
    tick: u64,
}

impl<'a> SearchView<'a> {
    pub fn new(
        state: &'a SearchState,
        input: &'a InputState,
        input_handle: &'a ElementHandle,
        button_handle: &'a ElementHandle,
    ) -> Self {
        Self {
            state,
            input,
            input_handle,
            button_handle,
            tick: 0,
        }
    }

    /// Animation tick driving the spinner.
    pub fn tick(mut self, tick: u64) -> Self {
        self.tick = tick;
        self
    }
}

impl Widget for SearchView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let column = centered_column(area, PANEL_WIDTH);
        if column.height < 2 {
            return;
        }

        let mut y = column.y;
        let bottom = column.bottom();
        let centered_line = |buf: &mut Buffer, y: u16, line: Line<'_>| {
            Paragraph::new(line)
                .alignment(Alignment::Center)
                .render(Rect { y, height: 1, ..column }, buf);
        };

        centered_line(
            buf,
            y,
            Line::styled(HEADING, Style::default().fg(TEXT).add_modifier(Modifier::BOLD)),
        );
        y += 1;
        centered_line(buf, y, Line::styled(SUBHEADING, Style::default().fg(MUTED_TEXT)));
        y += 2;

        if y + INPUT_HEIGHT > bottom {
            self.input_handle.forget();
            self.button_handle.forget();
            return;
        }

        let button = Button::new(SEARCH_LABEL).handle(self.button_handle);
        let button_width = button.width().min(column.width);
        let input_area = Rect {
            y,
            width: column.width.saturating_sub(button_width + 1),
            height: INPUT_HEIGHT,
            ..column
        };
        Input::new(self.input)
            .placeholder(INPUT_PLACEHOLDER)
            .handle(self.input_handle)
            .render(input_area, buf);
        button.render(
            Rect {
                x: column.right() - button_width,
                y: y + 1,
                width: button_width,
                height: 1,
            },
            buf,
        );
        y += INPUT_HEIGHT + 1;

        if y >= bottom {
            return;
        }
        let status_area = Rect {
            y,
            height: bottom - y,
            ..column
        };

        match &self.state.status {
            SearchStatus::Idle => {}
            SearchStatus::Loading => {
                let line = Line::from(vec![
                    Span::styled(spinner(self.tick), Style::default().fg(ACCENT_RED)),
                    Span::raw(" "),
                    Span::styled(LOADING_TEXT, Style::default().fg(MUTED_TEXT)),
                ]);
                centered_line(buf, y, line);
            }
            SearchStatus::Error(message) => {
                Paragraph::new(error_text(message))
                    .alignment(Alignment::Center)
                    .style(Style::default().fg(ACCENT_RED))
                    .wrap(Wrap { trim: true })
                    .render(status_area, buf);
            }
            SearchStatus::Success(movie) => movie_card(movie).render(status_area, buf),
        }
    }
}

fn detail<'a>(label: &'a str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(value, Style::default().fg(MUTED_TEXT)),
    ])
}

fn movie_card(movie: &MovieDetails) -> Card<'_> {
    let year_and_rating = Line::from(vec![
        Span::styled(movie.year.as_str(), Style::default().fg(MUTED_TEXT)),
        Span::raw("   "),
        Span::styled("★ ", Style::default().fg(RATING_STAR)),
        Span::styled(movie.imdb_rating.as_str(), Style::default().fg(MUTED_TEXT)),
    ]);

    Card::new()
        .title(movie.title.as_str())
        .description(movie.plot.as_str())
        .content(vec![
            year_and_rating,
            detail("Genre", &movie.genre),
            detail("Director", &movie.director),
            detail("Actors", &movie.actors),
            detail("Runtime", &movie.runtime),
            detail("Released", &movie.released),
        ])
        .footer(format!("Poster: {}", movie.poster_source()))
        .alignment(Alignment::Center)
}

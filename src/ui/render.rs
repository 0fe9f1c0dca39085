use crate::ui::app::App;
use crate::ui::components::AlertDialog;
use crate::ui::footer::{Footer, FooterHints};
use crate::ui::layout::layout_regions;
use crate::ui::options::OptionsDialog;
use crate::ui::search::SearchView;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub const QUIT_TITLE: &str = "Quit movie search?";

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (body, footer) = layout_regions(area);

    frame.render_widget(Clear, body);
    let handles = app.search_handles();
    frame.render_widget(
        SearchView::new(app.search(), app.query_input(), &handles.input, &handles.button)
            .tick(app.animation_tick()),
        body,
    );
    let hints = if app.quit_prompt().is_open() {
        FooterHints::QuitPrompt
    } else if app.options_dialog().is_visible() {
        FooterHints::Options
    } else {
        FooterHints::Search
    };
    frame.render_widget(Footer::new(hints), footer);

    frame.render_widget(
        OptionsDialog::new(app.options_dialog(), app.options_handles()),
        area,
    );

    let quit = app.quit_handles();
    frame.render_widget(
        AlertDialog::new(app.quit_prompt(), QUIT_TITLE)
            .description("The current search will be discarded.")
            .action_label("Quit")
            .handle(&quit.dialog)
            .cancel_handle(&quit.cancel)
            .action_handle(&quit.quit),
        area,
    );

    if let Some(position) = app.cursor_position() {
        frame.set_cursor_position(position);
    }
}

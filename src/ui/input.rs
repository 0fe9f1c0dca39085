use crate::ui::app::{App, Focus};
use crate::ui::components::alert_dialog::{ACTION_INDEX, CANCEL_INDEX};
use crate::ui::components::DismissReason;
use crate::ui::options::OptionsIntent;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.quit_prompt().is_open() {
        match key.code {
            KeyCode::Esc => app.dismiss_quit_prompt(DismissReason::Escape),
            KeyCode::Tab | KeyCode::Right => app.quit_prompt_mut().focus_next(),
            KeyCode::BackTab | KeyCode::Left => app.quit_prompt_mut().focus_prev(),
            KeyCode::Enter | KeyCode::Char(' ') => app.activate_quit_prompt(),
            _ => {}
        }
        return;
    }

    if app.options_dialog().is_visible() {
        match key.code {
            KeyCode::Esc => app.dispatch_options(OptionsIntent::Dismiss(DismissReason::Escape)),
            KeyCode::Tab => app.dispatch_options(OptionsIntent::FocusNext),
            KeyCode::BackTab => app.dispatch_options(OptionsIntent::FocusPrev),
            KeyCode::Up => app.dispatch_options(OptionsIntent::MoveUp),
            KeyCode::Down => app.dispatch_options(OptionsIntent::MoveDown),
            KeyCode::Enter | KeyCode::Char(' ') => app.activate_options_field(),
            _ => {}
        }
        return;
    }

    if is_ctrl_char(key, 'o') {
        app.open_options();
        return;
    }

    match key.code {
        KeyCode::Esc => app.open_quit_prompt(),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Enter => {
            app.submit_search();
        }
        KeyCode::Char(' ') if app.focus() == Focus::Button => {
            app.submit_search();
        }
        _ if app.focus() == Focus::Input => app.edit_query(key),
        _ => {}
    }
}

pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    let (column, row) = (mouse.column, mouse.row);

    if app.quit_prompt().is_open() {
        let handles = app.quit_handles().clone();
        if handles.cancel.contains(column, row) {
            app.quit_prompt_mut().set_focus(CANCEL_INDEX);
            app.activate_quit_prompt();
        } else if handles.quit.contains(column, row) {
            app.quit_prompt_mut().set_focus(ACTION_INDEX);
            app.activate_quit_prompt();
        } else if !handles.dialog.contains(column, row) {
            app.dismiss_quit_prompt(DismissReason::OutsideClick);
        }
        return;
    }

    if app.options_dialog().is_visible() {
        let handles = app.options_handles().clone();
        // The open list covers the fields below the plot trigger.
        if app.options_dialog().is_select_open() {
            if handles.plot_list.contains(column, row) {
                let item = handles
                    .plot_list
                    .area()
                    .zip(app.options_dialog().plot())
                    .and_then(|(list, plot)| plot.item_at(list, row));
                if let Some(index) = item {
                    app.dispatch_options(OptionsIntent::PickPlot(index));
                }
            } else {
                app.dispatch_options(OptionsIntent::CloseList);
            }
            return;
        }
        if handles.close.contains(column, row) {
            app.dispatch_options(OptionsIntent::Dismiss(DismissReason::CloseButton));
        } else if let Some(field) = handles.field_at(column, row) {
            app.dispatch_options(OptionsIntent::Focus(field));
            app.activate_options_field();
        } else if !handles.dialog.contains(column, row) {
            app.dispatch_options(OptionsIntent::Dismiss(DismissReason::OutsideClick));
        }
        return;
    }

    let handles = app.search_handles().clone();
    if handles.button.contains(column, row) {
        app.set_focus(Focus::Button);
        app.submit_search();
    } else if handles.input.contains(column, row) {
        app.set_focus(Focus::Input);
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

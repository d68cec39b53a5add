use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if matches!(key.code, KeyCode::Esc) || is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if is_ctrl_char(key, 'r') {
        app.random_pick();
        return;
    }
    if is_ctrl_char(key, 'u') {
        app.clear_query();
        return;
    }

    match key.code {
        KeyCode::Tab => app.focus_next(),
        KeyCode::BackTab => app.focus_previous(),
        KeyCode::Enter => {
            app.activate_focused();
        }
        KeyCode::Backspace if app.focus() == Focus::Input => app.backspace(),
        KeyCode::Char(ch)
            if app.focus() == Focus::Input && !key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.insert_char(ch);
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{ItemsApp, Request};

pub fn handle_event(app: &mut ItemsApp, event: Event) -> Option<Request> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        _ => None,
    }
}

fn handle_key(app: &mut ItemsApp, key: KeyEvent) -> Option<Request> {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            app.should_quit = true;
            None
        }
        (KeyCode::Enter, _) => app.submit(),
        (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
            app.edit_selected();
            None
        }
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => app.delete_selected(),
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => app.reload(),
        (KeyCode::Up, _) => {
            app.select_prev();
            None
        }
        (KeyCode::Down, _) => {
            app.select_next();
            None
        }
        (KeyCode::Backspace, _) => {
            app.input_backspace();
            None
        }
        (KeyCode::Delete, _) => {
            app.input_delete();
            None
        }
        (KeyCode::Left, _) => {
            app.input_left();
            None
        }
        (KeyCode::Right, _) => {
            app.input_right();
            None
        }
        (KeyCode::Home, _) => {
            app.input_home();
            None
        }
        (KeyCode::End, _) => {
            app.input_end();
            None
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            app.input_char(c);
            None
        }
        _ => None,
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::actions;
use crate::tui::app::{App, Mode};

use super::common;

pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => app.mode = Mode::Navigate,
        (_, KeyCode::Enter) => actions::submit_entry(app),
        (_, KeyCode::Backspace) => common::backspace(&mut app.entry, &mut app.entry_cursor),
        (_, KeyCode::Left) => common::move_left(&app.entry, &mut app.entry_cursor),
        (_, KeyCode::Right) => common::move_right(&app.entry, &mut app.entry_cursor),
        (_, KeyCode::Home) => app.entry_cursor = 0,
        (_, KeyCode::End) => app.entry_cursor = app.entry.len(),
        (modifiers, KeyCode::Char(c)) if !modifiers.contains(KeyModifiers::CONTROL) => {
            common::insert_char(&mut app.entry, &mut app.entry_cursor, c);
        }
        _ => {}
    }
}

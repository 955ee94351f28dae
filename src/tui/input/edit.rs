use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::actions;
use crate::tui::app::App;

use super::common;

/// Inline rename. Enter is the blur that commits; Esc abandons the edit
/// without a request.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => actions::cancel_edit(app),
        (_, KeyCode::Enter) => actions::commit_edit(app),
        (_, KeyCode::Backspace) => common::backspace(&mut app.edit_buffer, &mut app.edit_cursor),
        (_, KeyCode::Left) => common::move_left(&app.edit_buffer, &mut app.edit_cursor),
        (_, KeyCode::Right) => common::move_right(&app.edit_buffer, &mut app.edit_cursor),
        (_, KeyCode::Home) => app.edit_cursor = 0,
        (_, KeyCode::End) => app.edit_cursor = app.edit_buffer.len(),
        (modifiers, KeyCode::Char(c)) if !modifiers.contains(KeyModifiers::CONTROL) => {
            common::insert_char(&mut app.edit_buffer, &mut app.edit_cursor, c);
        }
        _ => {}
    }
}

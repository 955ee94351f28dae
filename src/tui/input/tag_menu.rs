use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::actions;
use crate::tui::app::App;

use super::common;

/// Keys while the tag menu is open. Typing edits the filter; Down moves
/// into the result list; Enter attaches.
pub(super) fn handle_tag_menu(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Esc) => app.close_overlay(),
        (_, KeyCode::Down) => cursor_down(app),
        (_, KeyCode::Up) => cursor_up(app),
        (_, KeyCode::Enter) => select(app),
        (KeyModifiers::CONTROL, KeyCode::Char('d')) | (_, KeyCode::Delete) => {
            request_delete(app);
        }
        (_, KeyCode::Backspace) => {
            if let Some(menu) = app.tag_menu_mut() {
                common::backspace(&mut menu.filter, &mut menu.filter_cursor);
                menu.cursor = None;
            }
        }
        (_, KeyCode::Left) => {
            if let Some(menu) = app.tag_menu_mut()
                && menu.cursor.is_none()
            {
                common::move_left(&menu.filter, &mut menu.filter_cursor);
            }
        }
        (_, KeyCode::Right) => {
            if let Some(menu) = app.tag_menu_mut()
                && menu.cursor.is_none()
            {
                common::move_right(&menu.filter, &mut menu.filter_cursor);
            }
        }
        (modifiers, KeyCode::Char(c)) if !modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(menu) = app.tag_menu_mut() {
                common::insert_char(&mut menu.filter, &mut menu.filter_cursor, c);
                // Every keystroke recomputes the result list; selection resets
                menu.cursor = None;
            }
        }
        // Anything unrouted counts as clicking outside the menu
        _ => app.close_overlay(),
    }
}

fn cursor_down(app: &mut App) {
    let Some(menu) = app.tag_menu_mut() else { return };
    let rows = menu.row_count();
    if rows == 0 {
        return;
    }
    menu.cursor = Some(match menu.cursor {
        None => 0,
        Some(c) => (c + 1).min(rows - 1),
    });
}

fn cursor_up(app: &mut App) {
    let Some(menu) = app.tag_menu_mut() else { return };
    menu.cursor = match menu.cursor {
        // Up from the first row returns focus to the filter field
        Some(0) | None => None,
        Some(c) => Some(c - 1),
    };
}

fn select(app: &mut App) {
    let Some(menu) = app.tag_menu() else { return };
    let selection = match menu.cursor {
        // Field focus: non-empty text attaches as-is, no match check
        None => {
            let text = menu.filter.trim();
            (!text.is_empty()).then(|| text.to_string())
        }
        Some(i) => {
            let matches = menu.matches();
            if let Some(tag) = matches.get(i) {
                Some(tag.name.clone())
            } else if menu.offers_create() {
                let text = menu.filter.trim();
                (!text.is_empty()).then(|| text.to_string())
            } else {
                None
            }
        }
    };
    if let Some(name) = selection {
        actions::attach_tag(app, &name);
    }
}

/// Ctrl-D on a highlighted tag row starts the global-delete confirmation.
/// The create row has nothing to delete.
fn request_delete(app: &mut App) {
    let Some(menu) = app.tag_menu() else { return };
    let Some(i) = menu.cursor else { return };
    let matches = menu.matches();
    let Some(tag) = matches.get(i) else { return };
    let (tag_id, tag_name) = (tag.id, tag.name.clone());
    actions::request_delete_tag(app, tag_id, tag_name);
}

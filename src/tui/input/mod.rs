mod color_picker;
mod common;
mod confirm;
mod edit;
mod insert;
mod navigate;
mod tag_menu;

use crossterm::event::{KeyCode, KeyEvent};

use super::app::{App, Mode, Overlay};

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // A pending confirmation intercepts all input
    if app.mode == Mode::Confirm {
        confirm::handle_confirm(app, key);
        return;
    }

    // Help overlay: any key dismisses
    if app.show_help {
        app.show_help = false;
        return;
    }

    // An open overlay owns the keyboard before mode dispatch
    if matches!(app.overlay, Some(Overlay::TagMenu(_))) {
        tag_menu::handle_tag_menu(app, key);
        return;
    }
    if matches!(app.overlay, Some(Overlay::ColorPicker(_))) {
        color_picker::handle_color_picker(app, key);
        return;
    }

    match app.mode {
        Mode::Navigate => navigate::handle_navigate(app, key),
        Mode::Insert => insert::handle_insert(app, key),
        Mode::Edit => edit::handle_edit(app, key),
        Mode::Confirm => {}
    }
}

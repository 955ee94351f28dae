use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::actions;
use crate::tui::app::{App, Overlay, TAG_COLOR_PALETTE};

pub(super) fn handle_color_picker(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_overlay(),
        KeyCode::Char('h') | KeyCode::Left => move_swatch(app, -1),
        KeyCode::Char('l') | KeyCode::Right => move_swatch(app, 1),
        KeyCode::Home => set_swatch(app, 0),
        KeyCode::End => set_swatch(app, TAG_COLOR_PALETTE.len() - 1),
        KeyCode::Enter => actions::pick_color(app),
        // Anything else is "outside" the picker and dismisses it
        _ => app.close_overlay(),
    }
}

fn move_swatch(app: &mut App, direction: i32) {
    let Some(Overlay::ColorPicker(picker)) = &mut app.overlay else {
        return;
    };
    if direction > 0 {
        if picker.cursor + 1 < TAG_COLOR_PALETTE.len() {
            picker.cursor += 1;
        }
    } else if picker.cursor > 0 {
        picker.cursor -= 1;
    }
}

fn set_swatch(app: &mut App, index: usize) {
    if let Some(Overlay::ColorPicker(picker)) = &mut app.overlay {
        picker.cursor = index;
    }
}

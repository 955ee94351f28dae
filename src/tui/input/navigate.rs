use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::actions;
use crate::tui::app::{App, Mode};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.should_quit = true,
        (_, KeyCode::Char('q')) => app.should_quit = true,

        (_, KeyCode::Char('j')) | (_, KeyCode::Down) => move_cursor(app, 1),
        (_, KeyCode::Char('k')) | (_, KeyCode::Up) => move_cursor(app, -1),
        (_, KeyCode::Char('g')) | (_, KeyCode::Home) => jump_to(app, 0),
        (_, KeyCode::Char('G')) | (_, KeyCode::End) => {
            jump_to(app, app.tasks.len().saturating_sub(1));
        }

        (_, KeyCode::Char('h')) | (_, KeyCode::Left) => pill_cursor_left(app),
        (_, KeyCode::Char('l')) | (_, KeyCode::Right) => pill_cursor_right(app),

        (_, KeyCode::Char(' ')) | (_, KeyCode::Char('x')) => {
            actions::toggle_cursor_task(app);
        }
        (_, KeyCode::Char('a')) | (_, KeyCode::Char('i')) => {
            app.mode = Mode::Insert;
        }
        (_, KeyCode::Char('e')) | (_, KeyCode::Enter) => actions::begin_edit(app),

        // d deletes the selected pill's tag if one is selected, else the task
        (_, KeyCode::Char('d')) => {
            if app.tag_cursor.is_some() {
                actions::request_remove_tag(app);
            } else {
                actions::request_delete_task(app);
            }
        }

        (_, KeyCode::Char('t')) => {
            if let Some(task) = app.cursor_task() {
                let task_id = task.id;
                app.open_tag_menu(task_id);
            }
        }
        (_, KeyCode::Char('c')) => {
            if let Some(tag) = app.cursor_tag().cloned() {
                app.open_color_picker(&tag);
            }
        }

        (_, KeyCode::Char('r')) => {
            app.refresh();
            app.set_status("refreshed");
        }
        (_, KeyCode::Char('?')) => app.show_help = true,
        (_, KeyCode::Esc) => {
            app.tag_cursor = None;
            app.status_message = None;
        }
        _ => {}
    }
}

fn move_cursor(app: &mut App, direction: i32) {
    if app.tasks.is_empty() {
        return;
    }
    if direction > 0 {
        if app.cursor + 1 < app.tasks.len() {
            app.cursor += 1;
        }
    } else if app.cursor > 0 {
        app.cursor -= 1;
    }
    app.tag_cursor = None;
}

fn jump_to(app: &mut App, index: usize) {
    if app.tasks.is_empty() {
        return;
    }
    app.cursor = index.min(app.tasks.len() - 1);
    app.tag_cursor = None;
}

fn pill_cursor_left(app: &mut App) {
    app.tag_cursor = match app.tag_cursor {
        Some(0) | None => None,
        Some(i) => Some(i - 1),
    };
}

fn pill_cursor_right(app: &mut App) {
    let tag_count = app.cursor_task().map_or(0, |t| t.tags.len());
    if tag_count == 0 {
        return;
    }
    app.tag_cursor = Some(match app.tag_cursor {
        None => 0,
        Some(i) => (i + 1).min(tag_count - 1),
    });
}

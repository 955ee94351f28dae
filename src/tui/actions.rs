//! Mutation actions: each issues one API call and then either patches the
//! task row it owns or re-derives everything from the server via
//! [`App::refresh`]. Failures never abort a surrounding batch.

use tracing::warn;

use crate::api::ApiError;
use crate::ops::compose;

use super::app::{App, ConfirmAction, ConfirmState, Mode, Overlay, TAG_COLOR_PALETTE};

/// Submit the entry field: one add call per `;`-separated part, strictly in
/// input order so the appended rows match what was typed. The field clears
/// only after every part was processed.
pub(crate) fn submit_entry(app: &mut App) {
    let drafts = compose::split_entry(&app.entry);
    if drafts.is_empty() {
        // Empty trimmed input: no request at all
        return;
    }
    let mut failed = 0usize;
    for draft in &drafts {
        match app
            .api
            .add_task(app.session_id, &draft.description, draft.tag.as_deref())
        {
            Ok(task) => app.tasks.push(task),
            Err(e) => {
                warn!(error = %e, description = %draft.description, "add task failed");
                failed += 1;
            }
        }
    }
    if failed > 0 {
        app.set_error(format!("{failed} task(s) not added"));
    }
    app.entry.clear();
    app.entry_cursor = 0;
    app.clamp_cursor();
}

/// Toggle the cursor task. The server's reply is authoritative and patches
/// exactly the one row with that id; nothing else changes.
pub(crate) fn toggle_cursor_task(app: &mut App) {
    let Some(task) = app.cursor_task() else { return };
    let task_id = task.id;
    match app.api.toggle_task(task_id) {
        Ok(is_completed) => {
            if let Some(task) = app.task_mut(task_id) {
                task.is_completed = is_completed;
            }
        }
        Err(e) => {
            warn!(error = %e, task_id, "toggle failed");
            app.set_error("toggle failed");
        }
    }
}

/// Start inline rename of the cursor task.
pub(crate) fn begin_edit(app: &mut App) {
    let Some(task) = app.cursor_task() else { return };
    let task_id = task.id;
    let description = task.description.clone();
    app.edit_task = Some(task_id);
    app.edit_buffer = description;
    app.edit_cursor = app.edit_buffer.len();
    app.mode = Mode::Edit;
}

/// Commit the rename (the field lost focus). Optimistic: the buffer becomes
/// the row's text immediately, a failed request is only logged, and the
/// next reload reconciles.
pub(crate) fn commit_edit(app: &mut App) {
    app.mode = Mode::Navigate;
    let Some(task_id) = app.edit_task.take() else { return };
    let text = app.edit_buffer.trim().to_string();
    if text.is_empty() {
        // Empty trimmed input: keep the old description, no request
        return;
    }
    if let Some(task) = app.task_mut(task_id) {
        task.description = text.clone();
    }
    if let Err(e) = app.api.rename_task(task_id, &text) {
        warn!(error = %e, task_id, "rename failed; row keeps edited text until next reload");
    }
}

pub(crate) fn cancel_edit(app: &mut App) {
    app.edit_task = None;
    app.mode = Mode::Navigate;
}

// ---------------------------------------------------------------------------
// Confirmed destructive actions

pub(crate) fn request_delete_task(app: &mut App) {
    let Some(task) = app.cursor_task() else { return };
    app.confirm = Some(ConfirmState {
        action: ConfirmAction::DeleteTask { task_id: task.id },
        message: format!("Delete task \"{}\"?", task.description),
    });
    app.mode = Mode::Confirm;
}

pub(crate) fn request_remove_tag(app: &mut App) {
    let (Some(task), Some(tag)) = (app.cursor_task(), app.cursor_tag()) else {
        return;
    };
    let (task_id, tag_name) = (task.id, tag.name.clone());
    app.confirm = Some(ConfirmState {
        message: format!("Remove tag \"{tag_name}\"?"),
        action: ConfirmAction::RemoveTag { task_id, tag_name },
    });
    app.mode = Mode::Confirm;
}

pub(crate) fn request_delete_tag(app: &mut App, tag_id: i64, tag_name: String) {
    app.confirm = Some(ConfirmState {
        message: format!(
            "Delete tag \"{tag_name}\" completely? This removes it from all tasks."
        ),
        action: ConfirmAction::DeleteTag { tag_id, tag_name },
    });
    app.mode = Mode::Confirm;
}

/// The user answered y. Dispatch whatever was pending.
pub(crate) fn confirm_yes(app: &mut App) {
    let state = app.confirm.take();
    app.mode = Mode::Navigate;
    let Some(state) = state else { return };
    match state.action {
        ConfirmAction::DeleteTask { task_id } => delete_task(app, task_id),
        ConfirmAction::RemoveTag { task_id, tag_name } => remove_tag(app, task_id, &tag_name),
        ConfirmAction::DeleteTag { tag_id, tag_name } => delete_tag(app, tag_id, &tag_name),
    }
}

/// The user answered n (or Esc). Nothing was sent, nothing changes.
pub(crate) fn confirm_no(app: &mut App) {
    app.confirm = None;
    app.mode = Mode::Navigate;
}

fn delete_task(app: &mut App, task_id: i64) {
    match app.api.delete_task(task_id) {
        Ok(()) => {
            app.refresh();
            app.set_status("task deleted");
        }
        Err(e) => {
            warn!(error = %e, task_id, "delete task failed");
            app.set_error("failed to delete task");
        }
    }
}

fn remove_tag(app: &mut App, task_id: i64, tag_name: &str) {
    match app.api.remove_tag(task_id, tag_name) {
        Ok(()) => {
            app.refresh();
            app.set_status(format!("removed tag \"{tag_name}\""));
        }
        Err(e) => {
            warn!(error = %e, task_id, tag_name, "remove tag failed");
            app.set_error("failed to remove tag");
        }
    }
}

/// Global tag delete, reachable from an open tag menu. Success edits the
/// menu's local snapshot in place and leaves the menu open; an `in_use`
/// rejection gets its own message, distinct from generic failure.
fn delete_tag(app: &mut App, tag_id: i64, tag_name: &str) {
    match app.api.delete_tag(tag_id) {
        Ok(()) => {
            if let Some(menu) = app.tag_menu_mut() {
                if let Some(tags) = &mut menu.tags {
                    tags.retain(|t| t.id != tag_id);
                }
                let rows = menu.row_count();
                match menu.cursor {
                    Some(_) if rows == 0 => menu.cursor = None,
                    Some(c) if c >= rows => menu.cursor = Some(rows - 1),
                    _ => {}
                }
            }
            app.set_status(format!("deleted tag \"{tag_name}\""));
        }
        Err(ApiError::TagInUse) => {
            app.set_error(format!("cannot delete \"{tag_name}\": tag is in use"));
        }
        Err(e) => {
            warn!(error = %e, tag_id, "delete tag failed");
            app.set_error("failed to delete tag");
        }
    }
}

// ---------------------------------------------------------------------------
// Overlay selections

/// Attach a tag (existing or new) to the menu's task. The menu closes
/// either way; only success reloads from the server.
pub(crate) fn attach_tag(app: &mut App, tag_name: &str) {
    let name = tag_name.trim();
    if name.is_empty() {
        return;
    }
    let Some(menu) = app.tag_menu() else { return };
    let task_id = menu.task_id;
    app.close_overlay();
    match app.api.add_tag(task_id, name) {
        Ok(()) => {
            app.refresh();
            app.set_status(format!("tagged \"{name}\""));
        }
        Err(e) => {
            warn!(error = %e, task_id, tag_name = name, "add tag failed");
            app.set_error("failed to add tag");
        }
    }
}

/// Apply the picker's selected swatch. The picker closes either way; a
/// failure is logged and the UI never claims success.
pub(crate) fn pick_color(app: &mut App) {
    let Some(Overlay::ColorPicker(picker)) = &app.overlay else {
        return;
    };
    let tag_id = picker.tag_id;
    let (_, hex) = TAG_COLOR_PALETTE[picker.cursor.min(TAG_COLOR_PALETTE.len() - 1)];
    app.close_overlay();
    match app.api.update_tag_color(tag_id, hex) {
        Ok(()) => app.refresh(),
        Err(e) => warn!(error = %e, tag_id, "color update failed"),
    }
}

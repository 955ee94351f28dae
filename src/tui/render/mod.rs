pub mod color_picker;
pub mod header;
pub mod helpers;
pub mod help_overlay;
pub mod status_row;
pub mod tag_menu;
pub mod task_list;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::{App, Overlay};

/// Main render function — dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | entry field | task list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    header::render_entry_row(frame, app, chunks[1]);

    // Cleared before the list renderer records the cursor row's geometry
    app.row_anchor = None;
    task_list::render_task_list(frame, app, chunks[2]);

    match &app.overlay {
        Some(Overlay::TagMenu(_)) => tag_menu::render_tag_menu(frame, app, area),
        Some(Overlay::ColorPicker(_)) => color_picker::render_color_picker(frame, app, area),
        None => {}
    }

    if app.show_help {
        help_overlay::render_help_overlay(frame, app, area);
    }

    status_row::render_status_row(frame, app, chunks[3]);
}

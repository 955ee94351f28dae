use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, RowAnchor};
use crate::util::unicode;

use super::helpers;

/// Render the task list and record the cursor row's tag-area geometry so
/// overlays can anchor below their trigger.
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let height = area.height as usize;
    let width = area.width as usize;
    if height == 0 {
        return;
    }

    if app.tasks.is_empty() {
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(
                "  nothing here yet \u{2014} press a and start typing",
                Style::default().fg(app.theme.dim).bg(bg),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
        return;
    }

    // Keep the cursor visible
    app.scroll_offset = app.scroll_offset.min(app.tasks.len() - 1);
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    }
    if app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor - height + 1;
    }

    let max_desc = (width / 2).max(24);
    let mut anchor: Option<RowAnchor> = None;
    let mut lines: Vec<Line> = Vec::new();

    for (row, task) in app
        .tasks
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let selected = row == app.cursor;
        let row_bg = if selected { app.theme.selection_bg } else { bg };
        let row_pad = Style::default().bg(row_bg);
        let mut spans: Vec<Span> = Vec::new();
        let mut col = 0usize;
        let mut push = |spans: &mut Vec<Span>, col: &mut usize, text: String, style: Style| {
            *col += unicode::display_width(&text);
            spans.push(Span::styled(text, style));
        };

        let indicator = if selected { " \u{25B6} " } else { "   " };
        push(&mut spans, &mut col, indicator.to_string(), row_pad);

        let checkbox = if task.is_completed { "[x] " } else { "[ ] " };
        let checkbox_style = if task.is_completed {
            Style::default().fg(app.theme.green).bg(row_bg)
        } else {
            Style::default().fg(app.theme.dim).bg(row_bg)
        };
        push(&mut spans, &mut col, checkbox.to_string(), checkbox_style);

        // Description, or the live rename buffer for the task being edited
        if app.edit_task == Some(task.id) {
            let base = Style::default().fg(app.theme.text_bright).bg(row_bg);
            let block = Style::default().fg(row_bg).bg(app.theme.text_bright);
            for span in helpers::cursor_spans(&app.edit_buffer, app.edit_cursor, base, block) {
                // Owned copies: the span list must not borrow from `app`
                let text = span.content.into_owned();
                col += unicode::display_width(&text);
                spans.push(Span::styled(text, span.style));
            }
        } else {
            let mut desc_style = Style::default()
                .fg(if selected {
                    app.theme.text_bright
                } else {
                    app.theme.text
                })
                .bg(row_bg);
            if task.is_completed {
                desc_style = desc_style
                    .fg(app.theme.dim)
                    .add_modifier(Modifier::CROSSED_OUT);
            }
            push(
                &mut spans,
                &mut col,
                unicode::truncate_to_width(&task.description, max_desc),
                desc_style,
            );
        }

        push(&mut spans, &mut col, "  ".to_string(), row_pad);

        // Tag pills, then the "+tag" affordance the menu hangs from
        let mut pill_x: Vec<u16> = Vec::new();
        for (i, tag) in task.tags.iter().enumerate() {
            pill_x.push(area.x + col.min(width) as u16);
            let mut pill_style = Style::default().fg(app.theme.tag_color(&tag.color)).bg(row_bg);
            if selected && app.tag_cursor == Some(i) {
                pill_style = pill_style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }
            push(
                &mut spans,
                &mut col,
                format!("\u{25CF}{}", tag.name),
                pill_style,
            );
            push(&mut spans, &mut col, " ".to_string(), row_pad);
        }
        let add_tag_x = area.x + col.min(width) as u16;
        push(
            &mut spans,
            &mut col,
            "+tag".to_string(),
            Style::default().fg(app.theme.dim).bg(row_bg),
        );

        if selected {
            anchor = Some(RowAnchor {
                row_y: area.y + (row - app.scroll_offset) as u16,
                pill_x,
                add_tag_x,
            });
        }

        helpers::pad_to_width(&mut spans, width, row_pad);
        lines.push(Line::from(spans));
    }

    app.row_anchor = anchor;
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

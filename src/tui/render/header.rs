use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

use super::helpers;

/// Top line: program name, session, task counts, time to the next reload.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let done = app.tasks.iter().filter(|t| t.is_completed).count();
    let left = format!(" docket \u{2014} session {}", app.session_id);
    let reload_in = app.reload_at.saturating_duration_since(std::time::Instant::now());
    let right = format!(
        "{}/{} done \u{00B7} reload in {}:{:02} ",
        done,
        app.tasks.len(),
        reload_in.as_secs() / 60,
        reload_in.as_secs() % 60,
    );

    let mut spans = vec![Span::styled(
        left,
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let used: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    let right_width = unicode::display_width(&right);
    if used + right_width < width {
        spans.push(Span::styled(
            " ".repeat(width - used - right_width),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(right, Style::default().fg(app.theme.dim).bg(bg)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

/// The new-task entry field, always visible under the header.
pub fn render_entry_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let editing = app.mode == Mode::Insert;

    let prompt_style = if editing {
        Style::default().fg(app.theme.highlight).bg(bg)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let mut spans = vec![Span::styled(" + ", prompt_style)];

    if editing {
        let base = Style::default().fg(app.theme.text_bright).bg(bg);
        let block = Style::default().fg(bg).bg(app.theme.text_bright);
        spans.extend(helpers::cursor_spans(&app.entry, app.entry_cursor, base, block));
    } else if app.entry.is_empty() {
        spans.push(Span::styled(
            "a to add \u{2014} parts split on ';', #tag attaches a tag",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
    } else {
        spans.push(Span::styled(
            app.entry.as_str(),
            Style::default().fg(app.theme.text).bg(bg),
        ));
    }

    helpers::pad_to_width(&mut spans, width, Style::default().bg(bg));
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

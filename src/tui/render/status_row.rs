use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the status row (bottom of screen): confirmation prompt, then
/// status/error message, then per-mode key hints.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    let line = if let Some(confirm) = &app.confirm {
        Line::from(vec![
            Span::styled(
                format!(" {} ", confirm.message),
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(bg)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "y/n",
                Style::default().fg(app.theme.highlight).bg(bg),
            ),
        ])
    } else if let Some(message) = &app.status_message {
        let color = if app.status_is_error {
            app.theme.red
        } else {
            app.theme.green
        };
        Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(color).bg(bg),
        ))
    } else {
        let hint = match app.mode {
            Mode::Navigate => {
                "j/k move \u{00B7} space toggle \u{00B7} a add \u{00B7} e edit \u{00B7} t tag \u{00B7} d delete \u{00B7} ? help"
            }
            Mode::Insert => "Enter add \u{00B7} Esc back",
            Mode::Edit => "Enter save \u{00B7} Esc cancel",
            Mode::Confirm => "",
        };
        Line::from(Span::styled(
            format!(" {hint}"),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    };

    frame.render_widget(Paragraph::new(line).style(Style::default().bg(bg)), area);
}

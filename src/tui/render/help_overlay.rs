use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

const HELP: [(&str, &str); 11] = [
    ("j/k", "move between tasks"),
    ("space / x", "toggle completion"),
    ("a", "add tasks (';' splits, #tag attaches)"),
    ("e / Enter", "edit description (Enter saves)"),
    ("h/l", "select a tag pill on the task"),
    ("d", "delete task, or selected pill's tag"),
    ("c", "color of the selected pill's tag"),
    ("t", "tag menu (type to filter, ^d deletes)"),
    ("r", "refresh from server now"),
    ("Esc", "dismiss pill selection / message"),
    ("q", "quit"),
];

/// Render the help overlay (centered)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let inner_w = 46usize;

    let mut lines: Vec<Line> = vec![Line::default()];
    for (key, what) in HELP {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {key:<10}"),
                Style::default().fg(app.theme.highlight).bg(bg),
            ),
            Span::styled(what, Style::default().fg(app.theme.text).bg(bg)),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "  any key to close",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let width = (inner_w as u16 + 2).min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    let popup_area = Rect::new(x, y, width, height);

    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .title(Span::styled(
            " keys ",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(bg)),
        popup_area,
    );
}

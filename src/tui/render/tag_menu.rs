use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::helpers;

const MENU_WIDTH: u16 = 34;
const MAX_ROWS: usize = 8;

/// Render the tag menu popup anchored below its trigger.
pub fn render_tag_menu(frame: &mut Frame, app: &App, area: Rect) {
    let Some(menu) = app.tag_menu() else { return };
    let bg = app.theme.background;
    let dim = app.theme.dim;
    let inner_w = (MENU_WIDTH - 2) as usize;

    let matches = menu.matches();
    let field_focused = menu.cursor.is_none();
    let mut lines: Vec<Line> = Vec::new();

    // Filter field
    {
        let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
        if menu.filter.is_empty() && !field_focused {
            spans.push(Span::styled(
                "tag name\u{2026}",
                Style::default().fg(dim).bg(bg),
            ));
        } else {
            let base = Style::default().fg(app.theme.text_bright).bg(bg);
            if field_focused {
                let block = Style::default().fg(bg).bg(app.theme.text_bright);
                spans.extend(helpers::cursor_spans(
                    &menu.filter,
                    menu.filter_cursor,
                    base,
                    block,
                ));
            } else {
                spans.push(Span::styled(menu.filter.as_str(), base));
            }
        }
        helpers::pad_to_width(&mut spans, inner_w, Style::default().bg(bg));
        lines.push(Line::from(spans));
    }

    if menu.tags.is_none() {
        lines.push(Line::from(Span::styled(
            " loading\u{2026}",
            Style::default().fg(dim).bg(bg),
        )));
    } else {
        // Result rows, windowed so the highlighted one stays visible
        let offset = match menu.cursor {
            Some(c) if c + 1 > MAX_ROWS => c + 1 - MAX_ROWS,
            _ => 0,
        };
        for (i, tag) in matches.iter().enumerate().skip(offset).take(MAX_ROWS) {
            let selected = menu.cursor == Some(i);
            let row_bg = if selected { app.theme.selection_bg } else { bg };
            let mut spans = vec![
                Span::styled(" ", Style::default().bg(row_bg)),
                Span::styled(
                    "\u{25CF} ",
                    Style::default().fg(app.theme.tag_color(&tag.color)).bg(row_bg),
                ),
                Span::styled(
                    tag.name.as_str(),
                    Style::default()
                        .fg(if selected {
                            app.theme.text_bright
                        } else {
                            app.theme.text
                        })
                        .bg(row_bg),
                ),
            ];
            helpers::pad_to_width(&mut spans, inner_w, Style::default().bg(row_bg));
            lines.push(Line::from(spans));
        }

        if menu.offers_create() {
            let i = matches.len();
            let selected = menu.cursor == Some(i);
            let row_bg = if selected { app.theme.selection_bg } else { bg };
            let mut spans = vec![Span::styled(
                format!(" create \"{}\"", menu.filter.trim()),
                Style::default()
                    .fg(app.theme.text)
                    .bg(row_bg)
                    .add_modifier(Modifier::ITALIC),
            )];
            helpers::pad_to_width(&mut spans, inner_w, Style::default().bg(row_bg));
            lines.push(Line::from(spans));
        }

        if matches.is_empty() && menu.filter.is_empty() {
            lines.push(Line::from(Span::styled(
                " no tags yet \u{2014} type to create",
                Style::default().fg(dim).bg(bg),
            )));
        }
    }

    // Hint bar
    lines.push(Line::from(Span::styled(
        " enter attach \u{00B7} ^d delete \u{00B7} esc",
        Style::default().fg(dim).bg(bg),
    )));

    let height = (lines.len() as u16).saturating_add(2);
    let popup_area = helpers::popup_rect(menu.anchor, MENU_WIDTH, height, area);
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(Span::styled(
            " tag ",
            Style::default()
                .fg(app.theme.highlight)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(dim).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .style(Style::default().bg(bg)),
        popup_area,
    );
}

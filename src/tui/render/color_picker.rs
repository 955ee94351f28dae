use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::{App, Overlay, TAG_COLOR_PALETTE};
use crate::tui::theme;

use super::helpers;

/// Render the color picker: one swatch per palette entry, anchored below
/// the tag pill that triggered it.
pub fn render_color_picker(frame: &mut Frame, app: &App, area: Rect) {
    let Some(Overlay::ColorPicker(picker)) = &app.overlay else {
        return;
    };
    let bg = app.theme.background;
    let inner_w = TAG_COLOR_PALETTE.len() * 2;

    let mut spans: Vec<Span> = Vec::new();
    for (i, (_, hex)) in TAG_COLOR_PALETTE.iter().enumerate() {
        let color = theme::parse_hex_color(hex).unwrap_or(app.theme.text);
        let mut style = Style::default().fg(color).bg(bg);
        if i == picker.cursor {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::styled("\u{25A0} ", style));
    }
    helpers::pad_to_width(&mut spans, inner_w, Style::default().bg(bg));

    let width = (inner_w as u16).saturating_add(2);
    let popup_area = helpers::popup_rect(picker.anchor, width, 3, area);
    frame.render_widget(Clear, popup_area);

    let title = format!(" {} ", picker.tag_name);
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(app.theme.tag_color(TAG_COLOR_PALETTE[picker.cursor].1))
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .block(block)
            .style(Style::default().bg(bg)),
        popup_area,
    );
}

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;

use crate::tui::app::Anchor;
use crate::util::unicode;

/// Pad spans to fill `target_width` with background.
pub(super) fn pad_to_width<'a>(spans: &mut Vec<Span<'a>>, target_width: usize, pad_style: Style) {
    let used: usize = spans
        .iter()
        .map(|s| unicode::display_width(&s.content))
        .sum();
    if used < target_width {
        spans.push(Span::styled(" ".repeat(target_width - used), pad_style));
    }
}

/// Place a popup of the wanted size below-left of its anchor, pulled back
/// inside `area` when it would spill past an edge.
pub(super) fn popup_rect(anchor: Anchor, width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let max_x = area.x + area.width - width;
    let max_y = area.y + area.height - height;
    Rect::new(anchor.x.min(max_x), anchor.y.min(max_y), width, height)
}

/// A one-cell cursor block over the grapheme at `cursor`, splitting `text`
/// into before / at / after spans.
pub(super) fn cursor_spans<'a>(
    text: &'a str,
    cursor: usize,
    base: Style,
    block: Style,
) -> Vec<Span<'a>> {
    let cursor = cursor.min(text.len());
    let (before, rest) = text.split_at(cursor);
    let at_end = rest.is_empty();
    let mut spans = vec![Span::styled(before, base)];
    if at_end {
        spans.push(Span::styled("\u{258C}", block));
    } else {
        let split = crate::util::unicode::next_boundary(rest, 0).unwrap_or(rest.len());
        let (at, after) = rest.split_at(split);
        spans.push(Span::styled(at, block));
        spans.push(Span::styled(after, base));
    }
    spans
}

//! Single-line text field editing shared by the entry, rename, and filter
//! fields. Cursors are byte offsets, moved grapheme by grapheme.

use crate::util::unicode;

pub(super) fn insert_char(buffer: &mut String, cursor: &mut usize, c: char) {
    buffer.insert(*cursor, c);
    *cursor += c.len_utf8();
}

pub(super) fn backspace(buffer: &mut String, cursor: &mut usize) {
    if let Some(prev) = unicode::prev_boundary(buffer, *cursor) {
        buffer.drain(prev..*cursor);
        *cursor = prev;
    }
}

pub(super) fn move_left(buffer: &str, cursor: &mut usize) {
    if let Some(prev) = unicode::prev_boundary(buffer, *cursor) {
        *cursor = prev;
    }
}

pub(super) fn move_right(buffer: &str, cursor: &mut usize) {
    if let Some(next) = unicode::next_boundary(buffer, *cursor) {
        *cursor = next;
    }
}

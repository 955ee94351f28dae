use serde::{Deserialize, Serialize};

/// The fixed palette offered for tag colors, label + hex.
pub const TAG_COLOR_PALETTE: [(&str, &str); 10] = [
    ("red", "#EF4444"),
    ("orange", "#F97316"),
    ("amber", "#F59E0B"),
    ("lime", "#84CC16"),
    ("emerald", "#10B981"),
    ("cyan", "#06B6D4"),
    ("blue", "#3B82F6"),
    ("indigo", "#6366F1"),
    ("violet", "#8B5CF6"),
    ("pink", "#EC4899"),
];

/// Hex value for a palette label, case-insensitive.
pub fn palette_hex(label: &str) -> Option<&'static str> {
    TAG_COLOR_PALETTE
        .iter()
        .find(|(l, _)| l.eq_ignore_ascii_case(label))
        .map(|(_, hex)| *hex)
}

/// A tag as the server reports it. Names are unique per workspace; the
/// color is a palette hex string or any CSS color string the server stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub color: String,
}

impl Tag {
    pub fn new(id: i64, name: impl Into<String>, color: impl Into<String>) -> Self {
        Tag {
            id,
            name: name.into(),
            color: color.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn palette_labels_resolve_case_insensitively() {
        assert_eq!(palette_hex("red"), Some("#EF4444"));
        assert_eq!(palette_hex("Emerald"), Some("#10B981"));
        assert_eq!(palette_hex("chartreuse"), None);
    }
}

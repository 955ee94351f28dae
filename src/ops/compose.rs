use std::sync::OnceLock;

use regex::Regex;

/// One task to create, parsed out of the entry field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub description: String,
    /// Inline `#tag` shorthand, stripped from the description.
    pub tag: Option<String>,
}

fn tag_marker() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"#(\w+)").unwrap())
}

/// Split the entry field into independent task drafts.
///
/// Parts are separated by `;`, trimmed, and blank parts dropped. The first
/// inline `#tag` marker in a part is stripped from the description and
/// carried as the initial tag. Drafts keep left-to-right input order; the
/// caller must create them in that order so the list matches the input.
pub fn split_entry(input: &str) -> Vec<TaskDraft> {
    input
        .split(';')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(parse_part)
        .collect()
}

fn parse_part(part: &str) -> TaskDraft {
    let Some(captures) = tag_marker().captures(part) else {
        return TaskDraft {
            description: part.to_string(),
            tag: None,
        };
    };
    let marker = captures.get(0).expect("whole match");
    let tag = captures[1].to_string();
    let mut description = String::with_capacity(part.len());
    description.push_str(&part[..marker.start()]);
    description.push_str(&part[marker.end()..]);
    TaskDraft {
        description: description.trim().to_string(),
        tag: Some(tag),
    }
}

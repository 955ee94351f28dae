use serde::{Deserialize, Serialize};

use super::tag::Tag;

/// A task as the server reports it. The server owns every task; the client
/// holds only a transient projection keyed by `id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub description: String,
    /// Absent in some add responses; defaults to not completed.
    #[serde(default)]
    pub is_completed: bool,
    /// Tags in the order the server keeps them.
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Task {
    /// Find a tag on this task by name.
    pub fn tag_named(&self, name: &str) -> Option<&Tag> {
        self.tags.iter().find(|t| t.name == name)
    }
}

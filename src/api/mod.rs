pub mod http;

#[cfg(test)]
pub mod fake;

pub use http::HttpApi;

use crate::model::{Tag, Task};

/// Errors from the task/tag API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned status {status}")]
    Status { status: u16 },
    /// The server refused a global tag delete because tasks still reference
    /// the tag. Recoverable; surfaced distinctly from generic failures.
    #[error("tag is still attached to one or more tasks")]
    TagInUse,
}

/// The task/tag endpoints the client depends on.
///
/// One implementation speaks HTTP/JSON to the server; tests substitute an
/// in-memory fake so the whole controller runs without a network.
pub trait TodoApi: Send + Sync {
    /// All tasks visible in a session, in server order.
    fn list_tasks(&self, session_id: i64) -> Result<Vec<Task>, ApiError>;

    /// Create a task, optionally with an initial tag (created on first use).
    fn add_task(
        &self,
        session_id: i64,
        description: &str,
        tag: Option<&str>,
    ) -> Result<Task, ApiError>;

    /// Flip a task's completion flag. Returns the new server-side value.
    fn toggle_task(&self, task_id: i64) -> Result<bool, ApiError>;

    /// Replace a task's description.
    fn rename_task(&self, task_id: i64, description: &str) -> Result<(), ApiError>;

    /// Delete a task.
    fn delete_task(&self, task_id: i64) -> Result<(), ApiError>;

    /// Attach a tag to a task by name, creating the tag if it is new.
    fn add_tag(&self, task_id: i64, tag_name: &str) -> Result<(), ApiError>;

    /// Detach a tag from one task. The tag itself survives.
    fn remove_tag(&self, task_id: i64, tag_name: &str) -> Result<(), ApiError>;

    /// The full tag set, in server order.
    fn list_tags(&self) -> Result<Vec<Tag>, ApiError>;

    /// Set a tag's color everywhere it appears.
    fn update_tag_color(&self, tag_id: i64, color: &str) -> Result<(), ApiError>;

    /// Delete a tag globally. Fails with [`ApiError::TagInUse`] while any
    /// task still references it.
    fn delete_tag(&self, tag_id: i64) -> Result<(), ApiError>;
}

use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::model::{Tag, Task};

use super::{ApiError, TodoApi};

/// Blocking HTTP/JSON client for the to-do server.
pub struct HttpApi {
    client: Client,
    base: String,
}

impl HttpApi {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!("docket/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(HttpApi {
            client,
            base: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    fn get(&self, path: &str) -> Result<Response, ApiError> {
        debug!(path, "GET");
        let resp = self.client.get(self.url(path)).send()?;
        expect_ok(path, resp)
    }

    fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<Response, ApiError> {
        debug!(path, "POST");
        let resp = self.client.post(self.url(path)).json(body).send()?;
        expect_ok(path, resp)
    }
}

fn expect_ok(path: &str, resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        Ok(resp)
    } else {
        warn!(path, status = status.as_u16(), "request rejected");
        Err(ApiError::Status {
            status: status.as_u16(),
        })
    }
}

// Request bodies, one per endpoint. Field names are the wire contract.

#[derive(Serialize)]
struct AddTaskBody<'a> {
    session_id: i64,
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tag: Option<&'a str>,
}

#[derive(Serialize)]
struct TaskIdBody {
    task_id: i64,
}

#[derive(Serialize)]
struct UpdateTaskBody<'a> {
    task_id: i64,
    description: &'a str,
}

#[derive(Serialize)]
struct TagOnTaskBody<'a> {
    task_id: i64,
    tag_name: &'a str,
}

#[derive(Serialize)]
struct UpdateColorBody<'a> {
    tag_id: i64,
    color: &'a str,
}

#[derive(Serialize)]
struct TagIdBody {
    tag_id: i64,
}

#[derive(Deserialize)]
struct ToggleReply {
    is_completed: bool,
}

/// Failure body for tag delete; `in_use` distinguishes the referential
/// rejection from a generic failure.
#[derive(Deserialize, Default)]
struct TagDeleteFailure {
    #[serde(default)]
    in_use: bool,
}

impl TodoApi for HttpApi {
    fn list_tasks(&self, session_id: i64) -> Result<Vec<Task>, ApiError> {
        let path = format!("/api/tasks?session_id={session_id}");
        Ok(self.get(&path)?.json()?)
    }

    fn add_task(
        &self,
        session_id: i64,
        description: &str,
        tag: Option<&str>,
    ) -> Result<Task, ApiError> {
        let body = AddTaskBody {
            session_id,
            description,
            tag,
        };
        Ok(self.post("/api/task/add", &body)?.json()?)
    }

    fn toggle_task(&self, task_id: i64) -> Result<bool, ApiError> {
        let reply: ToggleReply = self
            .post("/api/task/toggle", &TaskIdBody { task_id })?
            .json()?;
        Ok(reply.is_completed)
    }

    fn rename_task(&self, task_id: i64, description: &str) -> Result<(), ApiError> {
        self.post(
            "/api/task/update",
            &UpdateTaskBody {
                task_id,
                description,
            },
        )?;
        Ok(())
    }

    fn delete_task(&self, task_id: i64) -> Result<(), ApiError> {
        self.post("/api/task/delete", &TaskIdBody { task_id })?;
        Ok(())
    }

    fn add_tag(&self, task_id: i64, tag_name: &str) -> Result<(), ApiError> {
        self.post("/api/task/add_tag", &TagOnTaskBody { task_id, tag_name })?;
        Ok(())
    }

    fn remove_tag(&self, task_id: i64, tag_name: &str) -> Result<(), ApiError> {
        self.post("/api/task/remove_tag", &TagOnTaskBody { task_id, tag_name })?;
        Ok(())
    }

    fn list_tags(&self) -> Result<Vec<Tag>, ApiError> {
        Ok(self.get("/api/tags")?.json()?)
    }

    fn update_tag_color(&self, tag_id: i64, color: &str) -> Result<(), ApiError> {
        self.post("/api/tag/update_color", &UpdateColorBody { tag_id, color })?;
        Ok(())
    }

    fn delete_tag(&self, tag_id: i64) -> Result<(), ApiError> {
        let path = "/api/tag/delete";
        debug!(path, "POST");
        let resp = self
            .client
            .post(self.url(path))
            .json(&TagIdBody { tag_id })
            .send()?;
        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }
        // Non-2xx: the body tells in-use apart from everything else.
        let failure: TagDeleteFailure = resp.json().unwrap_or_default();
        if failure.in_use {
            Err(ApiError::TagInUse)
        } else {
            warn!(path, status = status.as_u16(), "request rejected");
            Err(ApiError::Status {
                status: status.as_u16(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    // The wire shapes are the contract; pin them without a network.

    #[test]
    fn add_task_body_with_tag() {
        let body = AddTaskBody {
            session_id: 4,
            description: "Buy milk",
            tag: Some("errands"),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"session_id": 4, "description": "Buy milk", "tag": "errands"})
        );
    }

    #[test]
    fn add_task_body_omits_absent_tag() {
        let body = AddTaskBody {
            session_id: 4,
            description: "Call mom",
            tag: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"session_id": 4, "description": "Call mom"})
        );
    }

    #[test]
    fn tag_on_task_body() {
        let body = TagOnTaskBody {
            task_id: 9,
            tag_name: "work",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"task_id": 9, "tag_name": "work"})
        );
    }

    #[test]
    fn update_color_body() {
        let body = UpdateColorBody {
            tag_id: 2,
            color: "#3B82F6",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"tag_id": 2, "color": "#3B82F6"})
        );
    }

    #[test]
    fn tag_delete_failure_defaults_to_generic() {
        let failure: TagDeleteFailure = serde_json::from_str("{}").unwrap();
        assert!(!failure.in_use);
        let failure: TagDeleteFailure =
            serde_json::from_str(r#"{"in_use": true}"#).unwrap();
        assert!(failure.in_use);
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let api = HttpApi::new("http://localhost:5000/").unwrap();
        assert_eq!(api.url("/api/tags"), "http://localhost:5000/api/tags");
    }
}

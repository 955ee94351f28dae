//! In-memory [`TodoApi`] for tests: records every call, plays the server's
//! part, and can be scripted to fail.

use std::sync::Mutex;

use crate::model::{Tag, Task};

use super::{ApiError, TodoApi};

const NEW_TAG_COLOR: &str = "#3B82F6";

/// What the fake was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListTasks,
    AddTask {
        description: String,
        tag: Option<String>,
    },
    Toggle(i64),
    Rename {
        task_id: i64,
        description: String,
    },
    DeleteTask(i64),
    AddTag {
        task_id: i64,
        tag_name: String,
    },
    RemoveTag {
        task_id: i64,
        tag_name: String,
    },
    ListTags,
    UpdateColor {
        tag_id: i64,
        color: String,
    },
    DeleteTag(i64),
}

#[derive(Default)]
struct State {
    tasks: Vec<Task>,
    tags: Vec<Tag>,
    next_task_id: i64,
    next_tag_id: i64,
    calls: Vec<Call>,
    fail_requests: bool,
    in_use_tags: Vec<i64>,
}

pub struct FakeApi {
    state: Mutex<State>,
}

impl FakeApi {
    pub fn new() -> Self {
        FakeApi {
            state: Mutex::new(State {
                next_task_id: 1,
                next_tag_id: 1,
                ..State::default()
            }),
        }
    }

    pub fn with_tags(tags: Vec<Tag>) -> Self {
        let api = FakeApi::new();
        {
            let mut state = api.state.lock().unwrap();
            state.next_tag_id = tags.iter().map(|t| t.id).max().unwrap_or(0) + 1;
            state.tags = tags;
        }
        api
    }

    pub fn seed_tasks(&self, tasks: Vec<Task>) {
        let mut state = self.state.lock().unwrap();
        state.next_task_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        state.tasks = tasks;
    }

    /// Make every subsequent request fail with a 500 (calls still recorded).
    pub fn fail_requests(&self, fail: bool) {
        self.state.lock().unwrap().fail_requests = fail;
    }

    /// Mark a tag as still referenced: deleting it reports `in_use`.
    pub fn mark_in_use(&self, tag_id: i64) {
        self.state.lock().unwrap().in_use_tags.push(tag_id);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.state.lock().unwrap().tasks.clone()
    }

    pub fn tags(&self) -> Vec<Tag> {
        self.state.lock().unwrap().tags.clone()
    }

    fn check_fail(state: &State) -> Result<(), ApiError> {
        if state.fail_requests {
            Err(ApiError::Status { status: 500 })
        } else {
            Ok(())
        }
    }
}

fn resolve_tag(state: &mut State, name: &str) -> Tag {
    if let Some(tag) = state.tags.iter().find(|t| t.name == name) {
        return tag.clone();
    }
    let tag = Tag::new(state.next_tag_id, name, NEW_TAG_COLOR);
    state.next_tag_id += 1;
    state.tags.push(tag.clone());
    tag
}

impl TodoApi for FakeApi {
    fn list_tasks(&self, _session_id: i64) -> Result<Vec<Task>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::ListTasks);
        Self::check_fail(&state)?;
        Ok(state.tasks.clone())
    }

    fn add_task(
        &self,
        _session_id: i64,
        description: &str,
        tag: Option<&str>,
    ) -> Result<Task, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::AddTask {
            description: description.to_string(),
            tag: tag.map(str::to_string),
        });
        Self::check_fail(&state)?;
        let tags = match tag {
            Some(name) => vec![resolve_tag(&mut state, name)],
            None => Vec::new(),
        };
        let task = Task {
            id: state.next_task_id,
            description: description.to_string(),
            is_completed: false,
            tags,
        };
        state.next_task_id += 1;
        state.tasks.push(task.clone());
        Ok(task)
    }

    fn toggle_task(&self, task_id: i64) -> Result<bool, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Toggle(task_id));
        Self::check_fail(&state)?;
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(ApiError::Status { status: 404 })?;
        task.is_completed = !task.is_completed;
        Ok(task.is_completed)
    }

    fn rename_task(&self, task_id: i64, description: &str) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::Rename {
            task_id,
            description: description.to_string(),
        });
        Self::check_fail(&state)?;
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(ApiError::Status { status: 404 })?;
        task.description = description.to_string();
        Ok(())
    }

    fn delete_task(&self, task_id: i64) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::DeleteTask(task_id));
        Self::check_fail(&state)?;
        state.tasks.retain(|t| t.id != task_id);
        Ok(())
    }

    fn add_tag(&self, task_id: i64, tag_name: &str) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::AddTag {
            task_id,
            tag_name: tag_name.to_string(),
        });
        Self::check_fail(&state)?;
        let tag = resolve_tag(&mut state, tag_name);
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(ApiError::Status { status: 404 })?;
        if task.tag_named(tag_name).is_none() {
            task.tags.push(tag);
        }
        Ok(())
    }

    fn remove_tag(&self, task_id: i64, tag_name: &str) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::RemoveTag {
            task_id,
            tag_name: tag_name.to_string(),
        });
        Self::check_fail(&state)?;
        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or(ApiError::Status { status: 404 })?;
        task.tags.retain(|t| t.name != tag_name);
        Ok(())
    }

    fn list_tags(&self) -> Result<Vec<Tag>, ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::ListTags);
        Self::check_fail(&state)?;
        Ok(state.tags.clone())
    }

    fn update_tag_color(&self, tag_id: i64, color: &str) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::UpdateColor {
            tag_id,
            color: color.to_string(),
        });
        Self::check_fail(&state)?;
        for tag in state.tags.iter_mut().filter(|t| t.id == tag_id) {
            tag.color = color.to_string();
        }
        for task in &mut state.tasks {
            for tag in task.tags.iter_mut().filter(|t| t.id == tag_id) {
                tag.color = color.to_string();
            }
        }
        Ok(())
    }

    fn delete_tag(&self, tag_id: i64) -> Result<(), ApiError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::DeleteTag(tag_id));
        Self::check_fail(&state)?;
        if state.in_use_tags.contains(&tag_id) {
            return Err(ApiError::TagInUse);
        }
        state.tags.retain(|t| t.id != tag_id);
        Ok(())
    }
}

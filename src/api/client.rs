//! Blocking REST client for the todo service.
//!
//! The service exposes three endpoints the store consumes: list (optionally
//! filtered server-side), create, and a partial update that flips
//! `completed`. Payloads are in wire (snake_case) form, with request bodies
//! nested under a `todo` key.

use serde_json::json;

use crate::api::wire::{WireTodo, to_external, to_internal};
use crate::model::todo::{DraftTodo, TodoRecord};

/// Error type for REST calls
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },
    #[error("todo service returned HTTP {status} for {url}")]
    Status { status: u16, url: String },
    #[error("could not decode todo service response: {0}")]
    Decode(#[from] std::io::Error),
}

/// Optional server-side filters for the list endpoint
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub completed: Option<bool>,
    pub category: Option<String>,
}

/// Client for one service base URL (e.g. `http://localhost:3000/api/v1`)
pub struct TodoApi {
    base_url: String,
    agent: ureq::Agent,
}

impl TodoApi {
    pub fn new(base_url: &str) -> Self {
        TodoApi {
            base_url: base_url.trim_end_matches('/').to_string(),
            agent: ureq::agent(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GET /todos
    pub fn list(&self, query: &ListQuery) -> Result<Vec<TodoRecord>, ApiError> {
        let url = self.url("/todos");
        let mut request = self.agent.get(&url);
        if let Some(completed) = query.completed {
            request = request.query("completed", if completed { "true" } else { "false" });
        }
        if let Some(ref category) = query.category {
            request = request.query("category", category);
        }
        let response = request.call().map_err(|e| wrap(url, e))?;
        let wires: Vec<WireTodo> = response.into_json()?;
        Ok(wires.into_iter().map(to_internal).collect())
    }

    /// POST /todos — returns the persisted record with its assigned id
    pub fn create(&self, draft: &DraftTodo) -> Result<TodoRecord, ApiError> {
        let url = self.url("/todos");
        let response = self
            .agent
            .post(&url)
            .send_json(json!({ "todo": to_external(draft) }))
            .map_err(|e| wrap(url, e))?;
        Ok(to_internal(response.into_json()?))
    }

    /// PUT /todos/:id — partial update carrying only the `completed` flag
    pub fn set_completed(&self, id: &str, completed: bool) -> Result<TodoRecord, ApiError> {
        let url = self.url(&format!("/todos/{}", id));
        let response = self
            .agent
            .put(&url)
            .send_json(json!({ "todo": { "completed": completed } }))
            .map_err(|e| wrap(url, e))?;
        Ok(to_internal(response.into_json()?))
    }
}

fn wrap(url: String, err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Status(status, _) => ApiError::Status { status, url },
        transport => ApiError::Transport {
            url,
            source: Box::new(transport),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let api = TodoApi::new("http://localhost:3000/api/v1/");
        assert_eq!(api.url("/todos"), "http://localhost:3000/api/v1/todos");
    }
}

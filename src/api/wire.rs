//! Wire-format mapping for the todo service.
//!
//! The service speaks Rails-style snake_case JSON and may send numeric ids;
//! everything internal uses the canonical camelCase record shape. The two
//! conversions live here as an explicit pair so the boundary is testable
//! without a live transport.

use serde::{Deserialize, Deserializer, Serialize};

use crate::model::todo::{DraftTodo, Priority, TodoRecord};

/// A todo as the service sends it
#[derive(Debug, Clone, Deserialize)]
pub struct WireTodo {
    #[serde(deserialize_with = "id_string")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: String,
    pub completed: bool,
    pub category: String,
    pub estimated_time: String,
}

/// A draft as the service accepts it on create. Never carries `id` or
/// `completed`; the service assigns both.
#[derive(Debug, Clone, Serialize)]
pub struct WireDraft {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: String,
    pub category: String,
    pub estimated_time: String,
}

/// Accept both `"42"` and `42` for the id field
fn id_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Num(i64),
        Str(String),
    }
    Ok(match Raw::deserialize(deserializer)? {
        Raw::Num(n) => n.to_string(),
        Raw::Str(s) => s,
    })
}

/// Wire record → canonical record
pub fn to_internal(wire: WireTodo) -> TodoRecord {
    TodoRecord {
        id: wire.id,
        title: wire.title,
        description: wire.description,
        priority: wire.priority,
        due_date: wire.due_date,
        completed: wire.completed,
        category: wire.category,
        estimated_time: wire.estimated_time,
    }
}

/// Draft → create-request payload
pub fn to_external(draft: &DraftTodo) -> WireDraft {
    WireDraft {
        title: draft.title.clone(),
        description: draft.description.clone(),
        priority: draft.priority,
        due_date: draft.due_date.clone(),
        category: draft.category.clone(),
        estimated_time: draft.estimated_time.clone(),
    }
}

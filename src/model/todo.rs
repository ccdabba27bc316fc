use serde::{Deserialize, Serialize};

/// Display priority of a todo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// The lowercase token used in serialized form and CLI flags
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Parse a priority token
    pub fn from_label(s: &str) -> Option<Priority> {
        match s {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

/// A single todo item, in the canonical internal shape.
///
/// Serialized with camelCase keys (`dueDate`, `estimatedTime`) — this is the
/// session-file format and the `--json` output shape. The service-side
/// snake_case form lives in `api::wire`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoRecord {
    /// Opaque identifier, unique in the collection, assigned once at creation
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    /// Calendar date string; no timezone semantics, not checked for futureness
    pub due_date: String,
    /// Starts false; flipped only by the toggle operation
    pub completed: bool,
    /// Free-form token. The creation form only offers work/personal/urgent,
    /// but fetched or seeded data can carry anything.
    pub category: String,
    /// Free-form ("2h", "30min"); never parsed as a duration
    pub estimated_time: String,
}

/// A creation payload: everything but `id` and `completed`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftTodo {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: String,
    pub category: String,
    pub estimated_time: String,
}

impl DraftTodo {
    /// Build the stored record: the given id, `completed` false
    pub fn into_record(self, id: String) -> TodoRecord {
        TodoRecord {
            id,
            title: self.title,
            description: self.description,
            priority: self.priority,
            due_date: self.due_date,
            completed: false,
            category: self.category,
            estimated_time: self.estimated_time,
        }
    }
}

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::model::todo::DraftTodo;

/// Field-keyed validation failures. Absence of a key means that field passed.
/// Keys use the canonical camelCase field names so the rendering layer can
/// attach messages to form inputs directly.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: IndexMap<&'static str, String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for a field, if it failed
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(|s| s.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.errors.iter().map(|(k, v)| (*k, v.as_str()))
    }

    fn push(&mut self, field: &'static str, message: &str) {
        self.errors.insert(field, message.to_string());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fields: Vec<&str> = self.errors.keys().copied().collect();
        write!(f, "required fields missing: {}", fields.join(", "))
    }
}

/// Check a draft's required fields before creation.
///
/// All four checks run independently so every failing field gets an entry and
/// the form can highlight them together. `priority` and `category` are never
/// checked: they always carry a default from the form's initial state.
/// `due_date` is checked for presence only, not trimmed — it comes from a
/// date input, not free text.
pub fn validate(draft: &DraftTodo) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();
    if draft.title.trim().is_empty() {
        errors.push("title", "title is required");
    }
    if draft.description.trim().is_empty() {
        errors.push("description", "description is required");
    }
    if draft.due_date.is_empty() {
        errors.push("dueDate", "due date is required");
    }
    if draft.estimated_time.trim().is_empty() {
        errors.push("estimatedTime", "estimated time is required");
    }
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

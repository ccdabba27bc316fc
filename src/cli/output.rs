use indexmap::IndexMap;
use serde::Serialize;

use crate::model::counts::CategoryCounts;
use crate::model::todo::TodoRecord;
use crate::ops::validate::ValidationErrors;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ListJson {
    pub view: String,
    pub count: usize,
    pub todos: Vec<TodoRecord>,
}

#[derive(Serialize)]
pub struct CountsJson {
    pub work: usize,
    pub personal: usize,
    pub urgent: usize,
    pub completed: usize,
    /// Reserved selector; nothing is ever archived, so always 0
    pub archive: usize,
    pub by_category: IndexMap<String, usize>,
}

#[derive(Serialize)]
pub struct InvalidDraftJson<'a> {
    pub errors: &'a ValidationErrors,
}

pub fn counts_to_json(counts: &CategoryCounts) -> CountsJson {
    CountsJson {
        work: counts.category("work"),
        personal: counts.category("personal"),
        urgent: counts.category("urgent"),
        completed: counts.completed,
        archive: 0,
        by_category: counts.by_category.clone(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Heading shown above a category view
pub fn view_title(selected: &str) -> &'static str {
    match selected {
        "home" => "All tasks",
        "work" => "Work",
        "personal" => "Personal",
        "urgent" => "Urgent",
        "completed" => "Completed",
        "archive" => "Archive",
        _ => "Tasks",
    }
}

fn checkbox_char(completed: bool) -> char {
    if completed { 'x' } else { ' ' }
}

/// Format a single todo as a one-line summary
pub fn format_todo_line(todo: &TodoRecord) -> String {
    format!(
        "[{}] {} {}  #{} !{} due {} ({})",
        checkbox_char(todo.completed),
        todo.id,
        todo.title,
        todo.category,
        todo.priority.label(),
        todo.due_date,
        todo.estimated_time
    )
}

/// Format a category view: heading with count, then one line per todo
pub fn format_listing(selected: &str, todos: &[&TodoRecord]) -> Vec<String> {
    let mut lines = vec![format!("{} ({})", view_title(selected), todos.len())];
    if todos.is_empty() {
        lines.push("  no tasks".to_string());
    }
    for todo in todos {
        lines.push(format!("  {}", format_todo_line(todo)));
    }
    lines
}

/// Format detailed todo view (shown after create)
pub fn format_todo_detail(todo: &TodoRecord) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format_todo_line(todo));
    lines.push(format!("  description: {}", todo.description));
    lines.push(format!("  category:    {}", todo.category));
    lines.push(format!("  priority:    {}", todo.priority.label()));
    lines.push(format!("  due:         {}", todo.due_date));
    lines.push(format!("  estimated:   {}", todo.estimated_time));
    lines
}

/// Format the sidebar counts block
pub fn format_counts(counts: &CategoryCounts) -> Vec<String> {
    vec![
        format!("work       {}", counts.category("work")),
        format!("personal   {}", counts.category("personal")),
        format!("urgent     {}", counts.category("urgent")),
        format!("completed  {}", counts.completed),
        "archive    0".to_string(),
    ]
}

use crate::model::todo::{Priority, TodoRecord};

/// Pseudo-category tokens: selectors that filter on derived state rather than
/// the literal `category` field.
pub const HOME: &str = "home";
pub const COMPLETED: &str = "completed";
pub const URGENT: &str = "urgent";

/// Select the records visible under a category token, preserving input order.
///
/// Rules are ordered and the first match wins:
///
/// 1. `home` — open items (`!completed`), any category
/// 2. `completed` — completed items, any category
/// 3. `urgent` — high-priority open items
/// 4. any other token — literal `category` match, any completion state
///
/// The pseudo-categories take precedence even when a record carries the same
/// string as its `category` field, so a completed record with
/// `category == "home"` is still excluded from the `home` view.
pub fn filter_todos<'a>(todos: &'a [TodoRecord], selected: &str) -> Vec<&'a TodoRecord> {
    todos.iter().filter(|t| matches_view(t, selected)).collect()
}

fn matches_view(todo: &TodoRecord, selected: &str) -> bool {
    match selected {
        HOME => !todo.completed,
        COMPLETED => todo.completed,
        URGENT => todo.priority == Priority::High && !todo.completed,
        other => todo.category == other,
    }
}

use crate::model::counts::CategoryCounts;
use crate::model::todo::TodoRecord;

/// Tally categories and completions in one pass over the full collection.
///
/// Completion state does not affect the per-category counts; a completed work
/// item still counts toward `work`. The sidebar's `completed` figure comes
/// from the separate tally, and `archive` is not computed here at all (it is
/// a reserved, currently inert selector rendered as 0 by the output layer).
pub fn aggregate(todos: &[TodoRecord]) -> CategoryCounts {
    let mut counts = CategoryCounts::default();
    for todo in todos {
        *counts.by_category.entry(todo.category.clone()).or_insert(0) += 1;
        if todo.completed {
            counts.completed += 1;
        }
    }
    counts
}

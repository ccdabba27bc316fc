use indexmap::IndexMap;
use serde::Serialize;

/// Per-category tallies over the whole collection.
///
/// `by_category` counts every record under its literal `category` token,
/// completed or not, in first-seen order. `completed` is a separate tally
/// across all categories. Always computed from the full collection so sidebar
/// counts stay global while the main view is scoped to one category.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CategoryCounts {
    pub by_category: IndexMap<String, usize>,
    pub completed: usize,
}

impl CategoryCounts {
    /// Count for a category token, 0 when absent
    pub fn category(&self, token: &str) -> usize {
        self.by_category.get(token).copied().unwrap_or(0)
    }
}

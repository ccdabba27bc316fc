use chrono::Utc;

use crate::api::client::{ApiError, ListQuery, TodoApi};
use crate::model::todo::{DraftTodo, TodoRecord};

/// Error type for store mutations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("todo not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Where mutations land and who assigns ids
pub enum Backend {
    /// Session-local collection; the store assigns ids
    Local,
    /// REST service; every successful write is followed by a re-fetch of the
    /// full list so the collection matches the service's view
    Remote(TodoApi),
}

/// Single-writer owner of the session's todo collection.
///
/// Reads always see the result of every prior mutation; derived views
/// (filtering, counts) are recomputed from `all()` on demand, never cached.
/// In remote mode a failed request leaves the collection untouched — each
/// mutation is all-or-nothing relative to the service's acknowledgment.
pub struct TodoStore {
    todos: Vec<TodoRecord>,
    backend: Backend,
    last_id: u64,
}

impl TodoStore {
    /// Local mode, seeded with the session's current records (newest first)
    pub fn local(todos: Vec<TodoRecord>) -> Self {
        TodoStore {
            todos,
            backend: Backend::Local,
            last_id: 0,
        }
    }

    /// Remote mode; call `refresh` to pull the initial collection
    pub fn remote(api: TodoApi) -> Self {
        TodoStore {
            todos: Vec::new(),
            backend: Backend::Remote(api),
            last_id: 0,
        }
    }

    /// Current collection, insertion order (newest first)
    pub fn all(&self) -> &[TodoRecord] {
        &self.todos
    }

    /// Re-pull the collection from the service. No-op in local mode.
    pub fn refresh(&mut self) -> Result<(), StoreError> {
        if let Backend::Remote(api) = &self.backend {
            self.todos = api.list(&ListQuery::default())?;
        }
        Ok(())
    }

    /// Append a record built from a validated draft.
    ///
    /// Local mode assigns a fresh id and prepends, so the newest record lists
    /// first. Remote mode posts the draft and then reconciles: the re-fetched
    /// list replaces the collection, with the create response spliced in if
    /// the listing does not carry the new record yet.
    pub fn create(&mut self, draft: DraftTodo) -> Result<&TodoRecord, StoreError> {
        match &self.backend {
            Backend::Local => {
                let id = self.next_id();
                self.todos.insert(0, draft.into_record(id));
                Ok(&self.todos[0])
            }
            Backend::Remote(api) => {
                let created = api.create(&draft)?;
                let id = created.id.clone();
                let mut listed = api.list(&ListQuery::default())?;
                if !listed.iter().any(|t| t.id == id) {
                    listed.insert(0, created);
                }
                self.todos = listed;
                self.find(&id)
            }
        }
    }

    /// Flip one record's `completed` flag.
    ///
    /// Unknown ids are a non-fatal `NotFound`; nothing is mutated. Only the
    /// targeted record changes — every other record is left untouched so a
    /// rendering layer can rely on identity for change detection. Remote mode
    /// sends the negated flag, takes the response as authoritative for that
    /// record, and re-fetches the rest of the list around it.
    pub fn toggle_complete(&mut self, id: &str) -> Result<&TodoRecord, StoreError> {
        let idx = self
            .todos
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        match &self.backend {
            Backend::Local => {
                let todo = &mut self.todos[idx];
                todo.completed = !todo.completed;
                Ok(&self.todos[idx])
            }
            Backend::Remote(api) => {
                let updated = api.set_completed(id, !self.todos[idx].completed)?;
                let mut listed = api.list(&ListQuery::default())?;
                match listed.iter().position(|t| t.id == updated.id) {
                    Some(i) => listed[i] = updated,
                    None => listed.insert(0, updated),
                }
                self.todos = listed;
                self.find(id)
            }
        }
    }

    fn find(&self, id: &str) -> Result<&TodoRecord, StoreError> {
        self.todos
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    /// Millisecond timestamp, bumped past the last issued id and past any id
    /// already in the collection, so creates never collide within a session.
    fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis().max(0) as u64;
        let mut candidate = now.max(self.last_id + 1);
        while self.todos.iter().any(|t| t.id == candidate.to_string()) {
            candidate += 1;
        }
        self.last_id = candidate;
        candidate.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::todo::Priority;
    use pretty_assertions::assert_eq;
    use std::collections::HashSet;

    fn draft(title: &str) -> DraftTodo {
        DraftTodo {
            title: title.into(),
            description: "desc".into(),
            priority: Priority::Medium,
            due_date: "2025-09-01".into(),
            category: "work".into(),
            estimated_time: "1h".into(),
        }
    }

    #[test]
    fn create_prepends_with_completed_false() {
        let mut store = TodoStore::local(Vec::new());
        store.create(draft("first")).unwrap();
        let id = store.create(draft("second")).unwrap().id.clone();

        let all = store.all();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, id);
        assert_eq!(all[0].title, "second");
        assert!(all.iter().all(|t| !t.completed));
    }

    #[test]
    fn created_ids_are_distinct() {
        let mut store = TodoStore::local(Vec::new());
        let mut ids = HashSet::new();
        for i in 0..50 {
            let id = store.create(draft(&format!("todo {}", i))).unwrap().id.clone();
            assert!(ids.insert(id), "duplicate id issued");
        }
        assert_eq!(store.all().len(), 50);
    }

    #[test]
    fn create_skips_ids_already_in_the_collection() {
        let mut store = TodoStore::local(Vec::new());
        let first = store.create(draft("a")).unwrap().id.clone();
        // Seed a second store with the same record; its fresh ids must avoid it
        let mut reseeded = TodoStore::local(store.all().to_vec());
        let second = reseeded.create(draft("b")).unwrap().id.clone();
        assert_ne!(first, second);
    }

    #[test]
    fn toggle_flips_only_the_target() {
        let mut store = TodoStore::local(Vec::new());
        store.create(draft("a")).unwrap();
        let id = store.all()[0].id.clone();
        store.create(draft("b")).unwrap();
        let other_before = store.all()[0].clone();

        let updated = store.toggle_complete(&id).unwrap();
        assert!(updated.completed);
        assert_eq!(updated.id, id);

        let other_after = store.all().iter().find(|t| t.id == other_before.id).unwrap();
        assert_eq!(*other_after, other_before);
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let mut store = TodoStore::local(Vec::new());
        let id = store.create(draft("a")).unwrap().id.clone();
        store.toggle_complete(&id).unwrap();
        let back = store.toggle_complete(&id).unwrap();
        assert!(!back.completed);
    }

    #[test]
    fn toggle_unknown_id_is_not_found_and_mutates_nothing() {
        let mut store = TodoStore::local(Vec::new());
        store.create(draft("a")).unwrap();
        let before = store.all().to_vec();

        match store.toggle_complete("missing") {
            Err(StoreError::NotFound(id)) => assert_eq!(id, "missing"),
            other => panic!("expected NotFound, got {:?}", other.map(|t| t.id.clone())),
        }
        assert_eq!(store.all(), &before[..]);
    }

    #[test]
    fn refresh_is_a_noop_in_local_mode() {
        let mut store = TodoStore::local(Vec::new());
        store.create(draft("a")).unwrap();
        store.refresh().unwrap();
        assert_eq!(store.all().len(), 1);
    }
}

use chrono::Utc;
use std::sync::Arc;
use ticklist_schema::{TodoChanges, TodoDraft, TodoResponse};
use tracing::{debug, info};

use super::mapper;
use crate::db::{DbTodo, TodoStore};
use crate::error::TicklistError;

/// One logical operation per request. Holds no todo state of its own; every call goes to
/// the store.
///
/// `update` and `delete` read then write without a version check, so a concurrent delete
/// between the two steps is not detected.
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, draft: TodoDraft) -> Result<TodoResponse, TicklistError> {
        let record = mapper::new_record(draft, Utc::now());
        let row = self.store.save(record).await?;
        info!(id = row.id, "Todo created");
        Ok(mapper::to_response(row))
    }

    pub async fn list_all(&self) -> Result<Vec<TodoResponse>, TicklistError> {
        let rows = self.store.find_all().await?;
        debug!(count = rows.len(), "Todos listed");
        Ok(rows.into_iter().map(mapper::to_response).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<TodoResponse, TicklistError> {
        let row = self.find_existing(id).await?;
        Ok(mapper::to_response(row))
    }

    pub async fn update(
        &self,
        id: i64,
        changes: TodoChanges,
    ) -> Result<TodoResponse, TicklistError> {
        let current = self.find_existing(id).await?;
        let record = mapper::apply_changes(current, changes, Utc::now());
        let row = self.store.save(record).await?;
        info!(id = row.id, completed = row.completed, "Todo updated");
        Ok(mapper::to_response(row))
    }

    pub async fn delete(&self, id: i64) -> Result<(), TicklistError> {
        let current = self.find_existing(id).await?;
        self.store.delete(&current).await?;
        info!(id, "Todo deleted");
        Ok(())
    }

    async fn find_existing(&self, id: i64) -> Result<DbTodo, TicklistError> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or(TicklistError::NotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::TodoRecord;
    use async_trait::async_trait;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// Map-backed store that counts writes so tests can assert nothing was persisted.
    #[derive(Default)]
    struct MapStore {
        rows: Mutex<BTreeMap<i64, DbTodo>>,
        next_id: Mutex<i64>,
        writes: Mutex<usize>,
    }

    impl MapStore {
        fn writes(&self) -> usize {
            *self.writes.lock().unwrap()
        }
    }

    #[async_trait]
    impl TodoStore for MapStore {
        async fn save(&self, record: TodoRecord) -> Result<DbTodo, TicklistError> {
            *self.writes.lock().unwrap() += 1;
            let id = record.id.unwrap_or_else(|| {
                let mut next = self.next_id.lock().unwrap();
                *next += 1;
                *next
            });
            let mut rows = self.rows.lock().unwrap();
            let created_at = rows.get(&id).map_or(record.created_at, |r| r.created_at);
            let row = DbTodo {
                id,
                title: record.title,
                description: record.description,
                completed: record.completed,
                created_at,
                updated_at: record.updated_at,
            };
            rows.insert(id, row.clone());
            Ok(row)
        }

        async fn find_all(&self) -> Result<Vec<DbTodo>, TicklistError> {
            Ok(self.rows.lock().unwrap().values().cloned().collect())
        }

        async fn find_by_id(&self, id: i64) -> Result<Option<DbTodo>, TicklistError> {
            Ok(self.rows.lock().unwrap().get(&id).cloned())
        }

        async fn delete(&self, todo: &DbTodo) -> Result<(), TicklistError> {
            *self.writes.lock().unwrap() += 1;
            self.rows.lock().unwrap().remove(&todo.id);
            Ok(())
        }
    }

    fn service() -> (TodoService, Arc<MapStore>) {
        let store = Arc::new(MapStore::default());
        (TodoService::new(store.clone()), store)
    }

    fn draft(title: &str) -> TodoDraft {
        TodoDraft {
            title: title.to_string(),
            description: Some("for the party".to_string()),
        }
    }

    #[tokio::test]
    async fn missing_id_is_not_found_and_writes_nothing() {
        let (svc, store) = service();

        assert!(matches!(
            svc.get_by_id(42).await,
            Err(TicklistError::NotFound { id: 42 })
        ));
        let changes = TodoChanges {
            title: "x".to_string(),
            description: None,
            completed: true,
        };
        assert!(matches!(
            svc.update(42, changes).await,
            Err(TicklistError::NotFound { id: 42 })
        ));
        assert!(matches!(
            svc.delete(42).await,
            Err(TicklistError::NotFound { id: 42 })
        ));
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn create_then_delete_round_trip() {
        let (svc, store) = service();

        let created = svc.create(draft("Bake cookies")).await.unwrap();
        assert_eq!(created.id, 1);
        assert!(!created.completed);
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(svc.get_by_id(created.id).await.unwrap(), created);

        svc.delete(created.id).await.unwrap();
        assert!(matches!(
            svc.get_by_id(created.id).await,
            Err(TicklistError::NotFound { .. })
        ));
        assert!(matches!(
            svc.delete(created.id).await,
            Err(TicklistError::NotFound { .. })
        ));
        assert_eq!(store.writes(), 2);
    }
}

use async_trait::async_trait;

use crate::db::actor::DbActorHandle;
use crate::db::models::{DbTodo, TodoRecord};
use crate::error::TicklistError;

/// Storage operations the todo service depends on.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// Insert or overwrite, returning the row as persisted.
    async fn save(&self, record: TodoRecord) -> Result<DbTodo, TicklistError>;

    async fn find_all(&self) -> Result<Vec<DbTodo>, TicklistError>;

    async fn find_by_id(&self, id: i64) -> Result<Option<DbTodo>, TicklistError>;

    async fn delete(&self, todo: &DbTodo) -> Result<(), TicklistError>;
}

#[async_trait]
impl TodoStore for DbActorHandle {
    async fn save(&self, record: TodoRecord) -> Result<DbTodo, TicklistError> {
        DbActorHandle::save(self, record).await
    }

    async fn find_all(&self) -> Result<Vec<DbTodo>, TicklistError> {
        DbActorHandle::find_all(self).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<DbTodo>, TicklistError> {
        DbActorHandle::find_by_id(self, id).await
    }

    async fn delete(&self, todo: &DbTodo) -> Result<(), TicklistError> {
        DbActorHandle::delete(self, todo.id).await
    }
}

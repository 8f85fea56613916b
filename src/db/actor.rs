use crate::db::models::{DbTodo, TodoRecord};
use crate::db::schema::SQLITE_INIT;
use crate::error::TicklistError;
use ractor::{Actor, ActorProcessingErr, ActorRef, RpcReplyPort};
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::{str::FromStr, time::Duration};
use tracing::{debug, info};

#[derive(Debug)]
pub enum DbActorMessage {
    /// Insert (id = None) or overwrite (id = Some) a todo and return the persisted row.
    Save(TodoRecord, RpcReplyPort<Result<DbTodo, TicklistError>>),

    /// List every todo ordered by id.
    FindAll(RpcReplyPort<Result<Vec<DbTodo>, TicklistError>>),

    /// Get a todo by id.
    FindById(i64, RpcReplyPort<Result<Option<DbTodo>, TicklistError>>),

    /// Delete a todo by id. Missing rows are not an error here.
    Delete(i64, RpcReplyPort<Result<(), TicklistError>>),
}

#[derive(Clone)]
pub struct DbActorHandle {
    actor: ActorRef<DbActorMessage>,
}

impl DbActorHandle {
    pub async fn save(&self, record: TodoRecord) -> Result<DbTodo, TicklistError> {
        ractor::call!(self.actor, DbActorMessage::Save, record)
            .map_err(|e| TicklistError::RactorError(format!("DbActor Save RPC failed: {e}")))?
    }

    pub async fn find_all(&self) -> Result<Vec<DbTodo>, TicklistError> {
        ractor::call!(self.actor, DbActorMessage::FindAll)
            .map_err(|e| TicklistError::RactorError(format!("DbActor FindAll RPC failed: {e}")))?
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<DbTodo>, TicklistError> {
        ractor::call!(self.actor, DbActorMessage::FindById, id).map_err(|e| {
            TicklistError::RactorError(format!("DbActor FindById RPC failed: {e}"))
        })?
    }

    pub async fn delete(&self, id: i64) -> Result<(), TicklistError> {
        ractor::call!(self.actor, DbActorMessage::Delete, id)
            .map_err(|e| TicklistError::RactorError(format!("DbActor Delete RPC failed: {e}")))?
    }
}

struct DbActorState {
    pool: SqlitePool,
}

struct DbActor;

#[ractor::async_trait]
impl Actor for DbActor {
    type Msg = DbActorMessage;
    type State = DbActorState;
    type Arguments = String;

    async fn pre_start(
        &self,
        _myself: ActorRef<Self::Msg>,
        database_url: Self::Arguments,
    ) -> Result<Self::State, ActorProcessingErr> {
        let connect_opts = SqliteConnectOptions::from_str(database_url.as_str())
            .map_err(|e| ActorProcessingErr::from(format!("invalid database url: {e}")))?
            .create_if_missing(true)
            .busy_timeout(Duration::from_secs(5))
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);

        let pool = SqlitePoolOptions::new()
            .connect_with(connect_opts)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db connect failed: {e}")))?;

        apply_schema(&pool)
            .await
            .map_err(|e| ActorProcessingErr::from(format!("db schema init failed: {e}")))?;

        info!("DbActor initialized");
        Ok(DbActorState { pool })
    }

    async fn handle(
        &self,
        _myself: ActorRef<Self::Msg>,
        message: Self::Msg,
        state: &mut Self::State,
    ) -> Result<(), ActorProcessingErr> {
        match message {
            DbActorMessage::Save(record, reply) => {
                let res = self.save(&state.pool, record).await;
                let _ = reply.send(res);
            }
            DbActorMessage::FindAll(reply) => {
                let res = self.find_all(&state.pool).await;
                let _ = reply.send(res);
            }
            DbActorMessage::FindById(id, reply) => {
                let res = self.find_by_id(&state.pool, id).await;
                let _ = reply.send(res);
            }
            DbActorMessage::Delete(id, reply) => {
                let res = self.delete(&state.pool, id).await;
                let _ = reply.send(res);
            }
        }
        Ok(())
    }
}

impl DbActor {
    async fn save(&self, pool: &SqlitePool, record: TodoRecord) -> Result<DbTodo, TicklistError> {
        let inserting = record.id.is_none();
        let row = sqlx::query_as::<_, DbTodo>(
            r#"
        INSERT INTO todos (id, title, description, completed, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        ON CONFLICT(id) DO UPDATE SET
            title = excluded.title,
            description = excluded.description,
            completed = excluded.completed,
            updated_at = excluded.updated_at
        RETURNING id, title, description, completed, created_at, updated_at
        "#,
        )
        .bind(record.id)
        .bind(record.title)
        .bind(record.description)
        .bind(record.completed)
        .bind(record.created_at)
        .bind(record.updated_at)
        .fetch_one(pool)
        .await?;

        debug!(
            id = row.id,
            inserting,
            updated_at = %row.updated_at,
            "db todo saved"
        );
        Ok(row)
    }

    async fn find_all(&self, pool: &SqlitePool) -> Result<Vec<DbTodo>, TicklistError> {
        let rows = sqlx::query_as::<_, DbTodo>(
            r#"
        SELECT id, title, description, completed, created_at, updated_at
        FROM todos
        ORDER BY id
        "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_id(&self, pool: &SqlitePool, id: i64) -> Result<Option<DbTodo>, TicklistError> {
        let row = sqlx::query_as::<_, DbTodo>(
            r#"
        SELECT id, title, description, completed, created_at, updated_at
        FROM todos
        WHERE id = ?
        "#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(row)
    }

    async fn delete(&self, pool: &SqlitePool, id: i64) -> Result<(), TicklistError> {
        let res = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;

        let affected = res.rows_affected();
        debug!(id, affected, "db todo deleted");
        Ok(())
    }
}

/// Spawn the database actor and return a cloneable handle.
///
/// The actor is unnamed so several stores can live in one process.
pub async fn spawn(database_url: &str) -> Result<DbActorHandle, TicklistError> {
    let (actor, _jh) = ractor::Actor::spawn(None, DbActor, database_url.to_string())
        .await
        .map_err(|e| TicklistError::RactorError(format!("failed to spawn DbActor: {e}")))?;

    Ok(DbActorHandle { actor })
}

async fn apply_schema(pool: &SqlitePool) -> Result<(), TicklistError> {
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(pool).await?;
    }
    Ok(())
}

//! Conversions between validated payloads, store records and response projections.

use chrono::{DateTime, Utc};
use ticklist_schema::{TodoChanges, TodoDraft, TodoResponse};

use crate::db::{DbTodo, TodoRecord};

/// A fresh record for insertion. `completed` always starts `false`; the store assigns the id.
pub fn new_record(draft: TodoDraft, now: DateTime<Utc>) -> TodoRecord {
    TodoRecord {
        id: None,
        title: draft.title,
        description: draft.description,
        completed: false,
        created_at: now,
        updated_at: now,
    }
}

/// Overwrite the three mutable fields of an existing row. `id` and `created_at` are carried
/// over untouched and `updated_at` never moves backwards.
pub fn apply_changes(current: DbTodo, changes: TodoChanges, now: DateTime<Utc>) -> TodoRecord {
    let updated_at = now.max(current.updated_at);
    TodoRecord {
        title: changes.title,
        description: changes.description,
        completed: changes.completed,
        updated_at,
        ..TodoRecord::from(current)
    }
}

pub fn to_response(row: DbTodo) -> TodoResponse {
    TodoResponse {
        id: row.id,
        title: row.title,
        description: row.description,
        completed: row.completed,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }
}

use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use ticklist::{TicklistError, TodoService};
use ticklist_schema::{TodoChanges, TodoDraft};

struct TestDb {
    path: PathBuf,
}

impl Drop for TestDb {
    fn drop(&mut self) {
        for suffix in ["-wal", "-shm", ""] {
            let _ = std::fs::remove_file(format!("{}{suffix}", self.path.display()));
        }
    }
}

async fn service(label: &str) -> (TodoService, TestDb) {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();
    let path = std::env::temp_dir().join(format!(
        "ticklist-service-{label}-{}-{nanos}.sqlite",
        std::process::id()
    ));
    let db = ticklist::db::spawn(&format!("sqlite:{}", path.display()))
        .await
        .expect("failed to spawn db actor");
    (TodoService::new(Arc::new(db)), TestDb { path })
}

fn draft(title: &str, description: Option<&str>) -> TodoDraft {
    TodoDraft {
        title: title.to_string(),
        description: description.map(str::to_string),
    }
}

#[tokio::test]
async fn create_assigns_fresh_ids_and_starts_incomplete() {
    let (svc, _db) = service("create").await;

    let a = svc.create(draft("Bake cookies", Some("for the party"))).await.unwrap();
    let b = svc.create(draft("Buy milk", None)).await.unwrap();

    assert_eq!(a.id, 1);
    assert_ne!(a.id, b.id);
    for todo in [&a, &b] {
        assert!(!todo.completed);
        assert_eq!(todo.created_at, todo.updated_at);
    }
    assert_eq!(b.description, None);

    svc.delete(b.id).await.unwrap();
    let c = svc.create(draft("Walk dog", None)).await.unwrap();
    assert!(c.id != a.id && c.id != b.id);
}

#[tokio::test]
async fn get_by_id_round_trips_and_is_idempotent() {
    let (svc, _db) = service("get").await;

    let created = svc.create(draft("Bake cookies", Some("for the party"))).await.unwrap();
    let first = svc.get_by_id(created.id).await.unwrap();
    let second = svc.get_by_id(created.id).await.unwrap();

    assert_eq!(first, created);
    assert_eq!(first, second);
}

#[tokio::test]
async fn list_all_returns_every_row() {
    let (svc, _db) = service("list").await;
    assert!(svc.list_all().await.unwrap().is_empty());

    let a = svc.create(draft("one", None)).await.unwrap();
    let b = svc.create(draft("two", None)).await.unwrap();

    assert_eq!(svc.list_all().await.unwrap(), vec![a, b]);
}

#[tokio::test]
async fn update_overwrites_mutable_fields_and_keeps_identity() {
    let (svc, _db) = service("update").await;

    let created = svc.create(draft("Bake cookies", Some("for the party"))).await.unwrap();
    let updated = svc
        .update(
            created.id,
            TodoChanges {
                title: "Bake cookies".to_string(),
                description: Some("done".to_string()),
                completed: true,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(updated.description.as_deref(), Some("done"));
    assert!(updated.completed);
    assert_eq!(svc.get_by_id(created.id).await.unwrap(), updated);

    // Dropping the description is an overwrite too, not "leave unchanged".
    let cleared = svc
        .update(
            created.id,
            TodoChanges {
                title: "Bake cookies".to_string(),
                description: None,
                completed: false,
            },
        )
        .await
        .unwrap();
    assert_eq!(cleared.description, None);
    assert!(!cleared.completed);
    assert!(cleared.updated_at >= updated.updated_at);
}

#[tokio::test]
async fn missing_ids_are_not_found() {
    let (svc, _db) = service("missing").await;

    for id in [999, 0, -1] {
        assert!(matches!(
            svc.get_by_id(id).await,
            Err(TicklistError::NotFound { id: got }) if got == id
        ));
        assert!(matches!(
            svc.update(
                id,
                TodoChanges {
                    title: "x".to_string(),
                    description: None,
                    completed: true,
                }
            )
            .await,
            Err(TicklistError::NotFound { .. })
        ));
        assert!(matches!(
            svc.delete(id).await,
            Err(TicklistError::NotFound { .. })
        ));
    }
    assert!(svc.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_is_terminal() {
    let (svc, _db) = service("delete").await;

    let created = svc.create(draft("Bake cookies", None)).await.unwrap();
    svc.delete(created.id).await.unwrap();

    assert!(matches!(
        svc.get_by_id(created.id).await,
        Err(TicklistError::NotFound { .. })
    ));
    assert!(matches!(
        svc.delete(created.id).await,
        Err(TicklistError::NotFound { .. })
    ));
    assert!(svc.list_all().await.unwrap().is_empty());
}

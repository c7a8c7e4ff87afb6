// End to end flow over the HTTP router with a file backed snapshot.
//
// Responsibilities
// - Drive create, update, list, get and delete through the real router.
// - Assert conflict handling under last write wins.
// - Assert that state survives a restart by reloading the snapshot file.

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use std::path::PathBuf;
use std::sync::Arc;
use crate::modules::tasks::adapters::outbound::task_store::TaskStore;
use crate::modules::tasks::core::resolve::UpdateRules;
use crate::modules::tasks::core::task::Task;
use crate::shared::infrastructure::snapshot_store::SnapshotStore;
use crate::shared::infrastructure::snapshot_store::json_file::JsonFileSnapshotStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use tempfile::{TempDir, tempdir};
use tower::ServiceExt;

struct Harness {
    _dir: TempDir,
    data_file: PathBuf,
}

impl Harness {
    async fn boot(&self) -> (Router, Arc<TaskStore>) {
        let snapshots = Arc::new(JsonFileSnapshotStore::new(&self.data_file));
        let store = Arc::new(TaskStore::load(snapshots).await);
        (
            router(AppState::new(store.clone(), UpdateRules::default())),
            store,
        )
    }
}

#[fixture]
fn harness() -> Harness {
    let dir = tempdir().expect("tempdir failed");
    let data_file = dir.path().join("data").join("tasks.json");
    Harness {
        _dir: dir,
        data_file,
    }
}

async fn call(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn timestamp(value: &Value) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value.as_str().unwrap())
        .unwrap()
        .with_timezone(&Utc)
}

fn iso(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[rstest]
#[tokio::test]
async fn it_should_reject_older_updates_and_accept_newer_ones(harness: Harness) {
    let (app, _) = harness.boot().await;

    let (status, created) = call(&app, "POST", "/tasks", Some(json!({ "title": "A" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["createdAt"], created["updatedAt"]);
    let t0 = timestamp(&created["updatedAt"]);

    let (status, _) = call(
        &app,
        "PUT",
        &format!("/tasks/{id}"),
        Some(json!({ "title": "B", "updatedAt": iso(t0 - Duration::seconds(1)) })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    let (_, stored) = call(&app, "GET", &format!("/tasks/{id}"), None).await;
    assert_eq!(stored, created);

    let client_stamp = t0 + Duration::seconds(1);
    let (status, updated) = call(
        &app,
        "PUT",
        &format!("/tasks/{id}"),
        Some(json!({ "title": "C", "updatedAt": iso(client_stamp) })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["title"], "C");
    assert_eq!(updated["createdAt"], created["createdAt"]);
    let stored_at = timestamp(&updated["updatedAt"]);
    assert!(stored_at > t0);
    assert_ne!(stored_at, client_stamp);
}

#[rstest]
#[tokio::test]
async fn it_should_create_on_update_of_an_unknown_id(harness: Harness) {
    let (app, _) = harness.boot().await;

    let (status, created) = call(&app, "PUT", "/tasks/x", Some(json!({ "title": "Z" }))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["id"], "x");
    assert_eq!(created["title"], "Z");
    assert_eq!(created["createdAt"], created["updatedAt"]);
}

#[rstest]
#[tokio::test]
async fn it_should_delete_and_then_report_not_found(harness: Harness) {
    let (app, store) = harness.boot().await;
    let (_, created) = call(&app, "POST", "/tasks", Some(json!({ "title": "gone" }))).await;
    let id = created["id"].as_str().unwrap().to_string();

    let (status, body) = call(&app, "DELETE", &format!("/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Task deleted successfully" }));

    let (status, _) = call(&app, "GET", &format!("/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, "DELETE", &format!("/tasks/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(store.is_empty().await);
}

#[rstest]
#[tokio::test]
async fn it_should_restore_every_task_after_a_restart(harness: Harness) {
    let (app, _) = harness.boot().await;
    call(&app, "POST", "/tasks", Some(json!({ "id": "a", "title": "first" }))).await;
    call(
        &app,
        "POST",
        "/tasks",
        Some(json!({ "id": "b", "title": "second", "location": { "lat": 52.09, "lng": 5.12 } })),
    )
    .await;
    call(&app, "DELETE", "/tasks/a", None).await;
    let (_, before) = call(&app, "GET", "/tasks", None).await;
    drop(app);

    let (restarted, _) = harness.boot().await;
    let (status, after) = call(&restarted, "GET", "/tasks", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(after, before);
    assert_eq!(after[0]["id"], "b");
    assert_eq!(after[0]["imagePath"], Value::Null);
    assert_eq!(after[0]["location"], json!({ "lat": 52.09, "lng": 5.12 }));
}

#[rstest]
#[tokio::test]
async fn it_should_start_fresh_from_a_corrupt_snapshot(harness: Harness) {
    std::fs::create_dir_all(harness.data_file.parent().unwrap()).unwrap();
    std::fs::write(&harness.data_file, "{ definitely not tasks").unwrap();

    let (app, _) = harness.boot().await;
    let (status, list) = call(&app, "GET", "/tasks", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([]));

    let (status, _) = call(&app, "POST", "/tasks", Some(json!({ "title": "after" }))).await;
    assert_eq!(status, StatusCode::CREATED);
    let reloaded = std::fs::read_to_string(&harness.data_file).unwrap();
    assert!(reloaded.contains("\"after\""));
}

#[rstest]
#[tokio::test]
async fn it_should_rewrite_a_loaded_snapshot_byte_for_byte(harness: Harness) {
    let (app, _) = harness.boot().await;
    call(&app, "POST", "/tasks", Some(json!({ "title": "one", "imagePath": null }))).await;
    call(&app, "POST", "/tasks", Some(json!({ "title": "two", "isCompleted": true }))).await;
    let original = std::fs::read(&harness.data_file).unwrap();

    let snapshots = JsonFileSnapshotStore::new(&harness.data_file);
    let loaded: Vec<Task> = snapshots.load().await.unwrap();
    snapshots.save(loaded.as_slice()).await.unwrap();

    assert_eq!(std::fs::read(&harness.data_file).unwrap(), original);
}

#[rstest]
#[tokio::test]
async fn it_should_keep_created_at_when_creating_over_an_existing_id(harness: Harness) {
    let (app, store) = harness.boot().await;
    let (_, first) = call(&app, "POST", "/tasks", Some(json!({ "id": "t-1", "title": "A" }))).await;

    let (status, second) = call(
        &app,
        "POST",
        "/tasks",
        Some(json!({ "id": "t-1", "title": "again", "createdAt": "2001-01-01T00:00:00.000Z" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(second["title"], "again");
    assert_eq!(second["createdAt"], first["createdAt"]);
    assert!(timestamp(&second["updatedAt"]) > timestamp(&first["updatedAt"]));
    assert_eq!(store.len().await, 1);
}

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::modules::time_tracking::core::subject::SubjectKind;
use crate::tests::fixtures::app::{TestApp, read_json};

fn send(method: &str, uri: String, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-user-id", "u1");
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn call(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

async fn total(router: &Router, control_id: &str) -> Value {
    let (_, json) = call(router, send("GET", format!("/controls/{control_id}"), None)).await;
    json["data"]["totalTimeMinutes"].clone()
}

#[tokio::test]
async fn an_added_entry_reads_back_exactly_as_submitted() {
    let app = TestApp::new();
    let router = app.router();
    let control_id = app.assign("u1", SubjectKind::Todo).await;
    let description = "x".repeat(100);

    let (status, created) = call(
        &router,
        send(
            "POST",
            format!("/todos/{control_id}/manual-time-entries"),
            Some(json!({
                "description": description,
                "durationMinutes": 30,
                "date": "2024-01-01",
                "userId": "u1"
            })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, listed) = call(
        &router,
        send("GET", format!("/todos/{control_id}/manual-time-entries"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let entries = listed["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], created["data"]["id"]);
    assert_eq!(entries[0]["durationMinutes"], 30);
    assert_eq!(entries[0]["description"], description.as_str());
    assert_eq!(entries[0]["date"], "2024-01-01");
    assert_eq!(total(&router, &control_id).await, 30);
}

#[tokio::test]
async fn corrections_and_deletions_keep_the_total_in_step() {
    let app = TestApp::new();
    let router = app.router();
    let control_id = app.assign("u1", SubjectKind::Case).await;
    let first = app.add_manual_entry(&control_id, "u1", 30).await;
    let second = app.add_manual_entry(&control_id, "u1", 20).await;
    assert_eq!(total(&router, &control_id).await, 50);

    let (status, updated) = call(
        &router,
        send(
            "PUT",
            format!("/manual-time-entries/{}", first.id),
            Some(json!({ "durationMinutes": "45", "date": "2024-02-29" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["durationMinutes"], 45);
    assert_eq!(updated["data"]["date"], "2024-02-29");
    assert_eq!(total(&router, &control_id).await, 65);

    let (status, deleted) = call(
        &router,
        send("DELETE", format!("/manual-time-entries/{}", second.id), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["data"]["deleted"], true);
    assert_eq!(total(&router, &control_id).await, 45);

    let (_, again) = call(
        &router,
        send("DELETE", format!("/manual-time-entries/{}", second.id), None),
    )
    .await;
    assert_eq!(again["data"]["deleted"], false);
    assert_eq!(
        app.outbox.event_types().await,
        vec![
            "ManualTimeEntryAdded",
            "ManualTimeEntryAdded",
            "ManualTimeEntryUpdated",
            "ManualTimeEntryDeleted"
        ]
    );
}

#[tokio::test]
async fn manual_minutes_add_to_timer_minutes() {
    let app = TestApp::new();
    let router = app.router();
    let control_id = app.assign("u1", SubjectKind::Todo).await;
    let (status, _) = call(
        &router,
        send("POST", "/timer/start".into(), Some(json!({ "todoControlId": control_id }))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    app.clock.advance_secs(300);
    let (status, stopped) = call(
        &router,
        send("POST", "/timer/stop".into(), Some(json!({ "todoControlId": control_id }))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stopped["data"]["totalMinutes"], 5);

    app.add_manual_entry(&control_id, "u1", 30).await;

    assert_eq!(total(&router, &control_id).await, 35);
}

#[tokio::test]
async fn invalid_corrections_are_rejected_field_by_field() {
    let app = TestApp::new();
    let router = app.router();
    let control_id = app.assign("u1", SubjectKind::Todo).await;
    let entry = app.add_manual_entry(&control_id, "u1", 30).await;

    let (status, json) = call(
        &router,
        send(
            "PUT",
            format!("/manual-time-entries/{}", entry.id),
            Some(json!({ "description": "too short", "date": "01/02/2024" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "VALIDATION_ERROR");
    assert_eq!(
        json["message"],
        "validation failed: description must be at least 100 characters; date must be a date formatted as YYYY-MM-DD"
    );
    assert_eq!(total(&router, &control_id).await, 30);
}

#[tokio::test]
async fn updating_an_unknown_entry_is_not_found() {
    let app = TestApp::new();

    let (status, json) = call(
        &app.router(),
        send(
            "PUT",
            "/manual-time-entries/missing".into(),
            Some(json!({ "durationMinutes": 5 })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "NOT_FOUND");
}

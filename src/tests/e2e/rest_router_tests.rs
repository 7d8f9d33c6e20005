use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rstest::rstest;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::modules::access_control::core::policy::AccessPolicy;
use crate::modules::time_tracking::core::subject::SubjectKind;
use crate::shell::state::AppEventStore;
use crate::tests::fixtures::app::{TestApp, read_json};
use crate::tests::fixtures::clock::START_MILLIS;

fn as_user(user_id: &str, method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-user-id", user_id);
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

#[tokio::test]
async fn health_needs_no_identity() {
    let app = TestApp::new();
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();

    let (status, json) = call(&app.router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[rstest]
#[case("GET", "/controls/ctl-1")]
#[case("POST", "/timer/start")]
#[case("GET", "/timer/active/ctl-1")]
#[case("DELETE", "/manual-time-entries/me-1")]
#[tokio::test]
async fn calls_without_a_caller_are_unauthenticated(#[case] method: &str, #[case] uri: &str) {
    let app = TestApp::new();
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let (status, json) = call(&app.router(), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"], "UNAUTHENTICATED");
}

#[tokio::test]
async fn a_record_is_created_then_read_back() {
    let app = TestApp::new();
    let router = app.router();
    let body = json!({
        "subjectKind": "case",
        "subjectId": "case-42",
        "userId": "u1",
        "statusId": "open"
    });

    let (status, created) = call(&router, as_user("u1", "POST", "/controls", Some(body))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["success"], true);
    let control_id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, fetched) = call(
        &router,
        as_user("u1", "GET", &format!("/controls/{control_id}"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"]["subjectKind"], "case");
    assert_eq!(fetched["data"]["subjectId"], "case-42");
    assert_eq!(fetched["data"]["totalTimeMinutes"], 0);
    assert_eq!(fetched["data"]["isTimerActive"], false);
    assert_eq!(fetched["data"]["createdAt"], START_MILLIS);
}

#[tokio::test]
async fn a_malformed_body_is_a_bad_request() {
    let app = TestApp::new();
    let request = Request::builder()
        .method("POST")
        .uri("/controls")
        .header("x-user-id", "u1")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, json) = call(&app.router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "BAD_REQUEST");
}

#[tokio::test]
async fn missing_fields_are_reported_together() {
    let app = TestApp::new();
    let body = json!({ "subjectKind": "todo" });

    let (status, json) = call(&app.router(), as_user("u1", "POST", "/controls", Some(body))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "VALIDATION_ERROR");
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("subjectId"));
    assert!(message.contains("userId"));
    assert!(message.contains("statusId"));
}

#[tokio::test]
async fn completing_a_record_stamps_completed_at() {
    let app = TestApp::new();
    let control_id = app.assign("u1", SubjectKind::Todo).await;
    app.clock.advance_secs(60);
    let uri = format!("/controls/{control_id}/status");

    let (status, json) = call(
        &app.router(),
        as_user("u1", "PUT", &uri, Some(json!({ "statusId": "done", "completed": true }))),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["statusId"], "done");
    assert_eq!(json["data"]["completedAt"], START_MILLIS + 60_000);
}

#[tokio::test]
async fn the_timer_is_driven_over_rest() {
    let app = TestApp::new();
    let router = app.router();
    let control_id = app.assign("u1", SubjectKind::Case).await;

    let (status, _) = call(
        &router,
        as_user("u1", "POST", "/timer/start", Some(json!({ "caseControlId": control_id }))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    app.clock.advance_secs(140);
    let (_, active) = call(
        &router,
        as_user("u1", "GET", &format!("/timer/active/{control_id}"), None),
    )
    .await;
    assert_eq!(active["data"]["isTimerActive"], true);
    assert_eq!(active["data"]["timerStartAt"], START_MILLIS);
    assert_eq!(active["data"]["currentSessionMinutes"], 2);

    let (status, paused) = call(
        &router,
        as_user("u1", "POST", "/timer/pause", Some(json!({ "controlId": control_id }))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(paused["data"]["durationMinutes"], 2);
    assert_eq!(paused["data"]["caseControl"]["isTimerActive"], false);

    let (status, again) = call(
        &router,
        as_user("u1", "POST", "/timer/stop", Some(json!({ "controlId": control_id }))),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(again["error"], "INVALID_STATE");

    let (_, entries) = call(
        &router,
        as_user("u1", "GET", &format!("/controls/{control_id}/time-entries"), None),
    )
    .await;
    let entries = entries["data"].as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["durationMinutes"], 2);
    assert_eq!(entries[0]["endTime"], START_MILLIS + 140_000);
}

#[tokio::test]
async fn starting_without_a_control_id_is_a_validation_error() {
    let app = TestApp::new();

    let (status, json) = call(
        &app.router(),
        as_user("u1", "POST", "/timer/start", Some(json!({}))),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn someone_elses_record_is_forbidden() {
    let app = TestApp::new();
    let control_id = app.assign("u1", SubjectKind::Todo).await;

    let (status, json) = call(
        &app.router(),
        as_user("u2", "GET", &format!("/controls/{control_id}"), None),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"], "FORBIDDEN");
}

#[tokio::test]
async fn concurrent_starts_let_exactly_one_through() {
    let app = TestApp::new();
    let control_id = app.assign("u1", SubjectKind::Todo).await;
    app.event_store.set_delay_append_ms(10);
    let router = app.router();
    let body = json!({ "controlId": control_id });

    let (first, second) = tokio::join!(
        call(&router, as_user("u1", "POST", "/timer/start", Some(body.clone()))),
        call(&router, as_user("u1", "POST", "/timer/start", Some(body.clone()))),
    );

    let mut statuses = vec![first.0, second.0];
    statuses.sort();
    assert_eq!(statuses, vec![StatusCode::OK, StatusCode::CONFLICT]);
    let loser = if first.0 == StatusCode::CONFLICT { first.1 } else { second.1 };
    assert_eq!(loser["error"], "CONFLICT");
}

#[rstest]
#[case(false, "internal server error")]
#[case(true, "backend error: Event store offline")]
#[tokio::test]
async fn internal_failures_hide_details_outside_development(
    #[case] expose: bool,
    #[case] message: &str,
) {
    let mut store = AppEventStore::new();
    store.toggle_offline();
    let app = TestApp::from_parts(store, AccessPolicy::own_records_only(), expose);

    let (status, json) = call(&app.router(), as_user("u1", "GET", "/controls/ctl-1", None)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "INTERNAL");
    assert_eq!(json["message"], message);
}

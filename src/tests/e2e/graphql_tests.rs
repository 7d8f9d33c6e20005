use async_graphql::Request;
use axum::{
    body::Body,
    http::{self, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::modules::access_control::core::scope::Actor;
use crate::modules::time_tracking::core::subject::SubjectKind;
use crate::shell::graphql::{AppSchema, build_schema};
use crate::tests::fixtures::app::{TestApp, read_json};
use crate::tests::fixtures::clock::START_MILLIS;

async fn run(schema: &AppSchema, user_id: &str, query: String) -> Value {
    let response = schema
        .execute(Request::new(query).data(Actor::new(user_id)))
        .await;
    serde_json::to_value(&response).unwrap()
}

async fn assign_todo(schema: &AppSchema, owner: &str) -> String {
    let json = run(
        schema,
        owner,
        format!(
            r#"mutation {{ assignControlRecord(subjectKind: TODO, subjectId: "todo-7", userId: "{owner}", statusId: "open") {{ id subjectKind }} }}"#
        ),
    )
    .await;
    assert_eq!(json["data"]["assignControlRecord"]["subjectKind"], "TODO");
    json["data"]["assignControlRecord"]["id"]
        .as_str()
        .unwrap()
        .to_string()
}

#[tokio::test]
async fn a_timer_session_is_tracked_through_graphql() {
    let app = TestApp::new();
    let schema = build_schema(app.state.clone());
    let control_id = assign_todo(&schema, "u1").await;

    let started = run(
        &schema,
        "u1",
        format!(r#"mutation {{ startTimer(controlId: "{control_id}") {{ isTimerActive timerStartAt }} }}"#),
    )
    .await;
    assert_eq!(started["data"]["startTimer"]["isTimerActive"], true);
    assert_eq!(started["data"]["startTimer"]["timerStartAt"], START_MILLIS);

    app.clock.advance_secs(4 * 60);
    let note = "s".repeat(100);
    let active = run(
        &schema,
        "u1",
        format!(r#"{{ activeTime(controlId: "{control_id}") {{ currentSessionMinutes totalTimeMinutes }} }}"#),
    )
    .await;
    assert_eq!(active["data"]["activeTime"]["currentSessionMinutes"], 4);
    assert_eq!(active["data"]["activeTime"]["totalTimeMinutes"], 0);

    let stopped = run(
        &schema,
        "u1",
        format!(
            r#"mutation {{ stopTimer(controlId: "{control_id}", description: "{note}") {{ durationMinutes totalMinutes description caseControl {{ isTimerActive }} }} }}"#
        ),
    )
    .await;
    let outcome = &stopped["data"]["stopTimer"];
    assert_eq!(outcome["durationMinutes"], 4);
    assert_eq!(outcome["totalMinutes"], 4);
    assert_eq!(outcome["description"], note.as_str());
    assert_eq!(outcome["caseControl"]["isTimerActive"], false);

    let entries = run(
        &schema,
        "u1",
        format!(r#"{{ timeEntries(controlId: "{control_id}") {{ durationMinutes description endTime }} }}"#),
    )
    .await;
    assert_eq!(
        entries["data"]["timeEntries"],
        json!([{ "durationMinutes": 4, "description": note, "endTime": START_MILLIS + 240_000 }])
    );
}

#[tokio::test]
async fn manual_entries_are_managed_through_graphql() {
    let app = TestApp::new();
    let schema = build_schema(app.state.clone());
    let control_id = assign_todo(&schema, "u1").await;
    let description = "d".repeat(100);

    let added = run(
        &schema,
        "u1",
        format!(
            r#"mutation {{ addManualTimeEntry(controlId: "{control_id}", description: "{description}", durationMinutes: 30, date: "2024-03-05", userId: "u1") {{ id date durationMinutes }} }}"#
        ),
    )
    .await;
    let entry = &added["data"]["addManualTimeEntry"];
    assert_eq!(entry["date"], "2024-03-05");
    assert_eq!(entry["durationMinutes"], 30);
    let entry_id = entry["id"].as_str().unwrap().to_string();

    let updated = run(
        &schema,
        "u1",
        format!(r#"mutation {{ updateManualTimeEntry(entryId: "{entry_id}", durationMinutes: 45) {{ durationMinutes }} }}"#),
    )
    .await;
    assert_eq!(updated["data"]["updateManualTimeEntry"]["durationMinutes"], 45);

    let listed = run(
        &schema,
        "u1",
        format!(r#"{{ manualTimeEntries(controlId: "{control_id}") {{ id durationMinutes }} controlRecord(controlId: "{control_id}") {{ totalTimeMinutes }} }}"#),
    )
    .await;
    assert_eq!(listed["data"]["manualTimeEntries"][0]["id"], entry_id.as_str());
    assert_eq!(listed["data"]["controlRecord"]["totalTimeMinutes"], 45);

    let deleted = run(
        &schema,
        "u1",
        format!(r#"mutation {{ deleteManualTimeEntry(entryId: "{entry_id}") }}"#),
    )
    .await;
    assert_eq!(deleted["data"]["deleteManualTimeEntry"], true);
}

#[tokio::test]
async fn domain_errors_carry_their_code() {
    let app = TestApp::new();
    let schema = build_schema(app.state.clone());
    let control_id = assign_todo(&schema, "u1").await;

    let stopped = run(
        &schema,
        "u1",
        format!(r#"mutation {{ stopTimer(controlId: "{control_id}") {{ durationMinutes }} }}"#),
    )
    .await;
    assert_eq!(stopped["errors"][0]["extensions"]["code"], "INVALID_STATE");

    let foreign = run(
        &schema,
        "u2",
        format!(r#"{{ controlRecord(controlId: "{control_id}") {{ id }} }}"#),
    )
    .await;
    assert_eq!(foreign["errors"][0]["extensions"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn the_router_reads_the_caller_from_headers() {
    let app = TestApp::new();
    let control_id = app
        .assign("u1", SubjectKind::Case)
        .await;
    let query = json!({
        "query": format!(r#"{{ controlRecord(controlId: "{control_id}") {{ subjectKind userId }} }}"#)
    });
    let request = http::Request::builder()
        .method("POST")
        .uri("/gql")
        .header("x-user-id", "u1")
        .header("content-type", "application/json")
        .body(Body::from(query.to_string()))
        .unwrap();

    let response = app.router().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = read_json(response).await;
    assert_eq!(json["data"]["controlRecord"]["subjectKind"], "CASE");
    assert_eq!(json["data"]["controlRecord"]["userId"], "u1");
}

use crate::modules::access_control::core::policy::AccessPolicy;
use crate::modules::access_control::core::scope::Actor;
use crate::modules::time_tracking::application::errors::ErrorKind;
use crate::modules::time_tracking::core::subject::SubjectKind;
use crate::modules::time_tracking::use_cases::assign_control_record::command::AssignControlRecordInput;
use crate::tests::fixtures::app::TestApp;
use rstest::{fixture, rstest};

const TEAM_POLICY: &str = r#"{
    "roles": {
        "member": [
            {"module": "todos", "action": "read", "scope": "own"},
            {"module": "todos", "action": "create", "scope": "own"},
            {"module": "todos", "action": "update", "scope": "own"},
            {"module": "todos", "action": "delete", "scope": "own"},
            {"module": "cases", "action": "read", "scope": "own"},
            {"module": "cases", "action": "create", "scope": "own"},
            {"module": "cases", "action": "update", "scope": "own"}
        ],
        "lead": [
            {"module": "todos", "action": "read", "scope": "team"},
            {"module": "todos", "action": "update", "scope": "team"}
        ],
        "auditor": [
            {"module": "cases", "action": "read", "scope": "all"},
            {"module": "todos", "action": "read", "scope": "all"}
        ]
    },
    "users": {
        "lead": ["member", "lead"],
        "auditor": ["auditor"]
    },
    "teams": {
        "alpha": ["lead", "u1"]
    },
    "defaultRole": "member"
}"#;

#[fixture]
fn app() -> TestApp {
    TestApp::with_policy(AccessPolicy::from_json(TEAM_POLICY).unwrap())
}

#[rstest]
#[tokio::test]
async fn a_team_scope_reaches_teammates_only(app: TestApp) {
    let teammate = app.assign("u1", SubjectKind::Todo).await;
    let outsider = app.assign("u3", SubjectKind::Todo).await;
    let lead = Actor::new("lead");

    let allowed = app.state.get_control_record.handle(&lead, &teammate).await;
    let denied = app.state.get_control_record.handle(&lead, &outsider).await;

    assert_eq!(allowed.unwrap().user_id, "u1");
    assert_eq!(denied.unwrap_err().kind(), ErrorKind::Forbidden);
}

#[rstest]
#[tokio::test]
async fn a_lead_can_stop_a_teammates_timer(app: TestApp) {
    let control_id = app.assign("u1", SubjectKind::Todo).await;
    app.state
        .start_timer
        .handle(&Actor::new("u1"), &control_id)
        .await
        .unwrap();
    app.clock.advance_secs(180);

    let outcome = app
        .state
        .stop_timer
        .stop(&Actor::new("lead"), &control_id, None)
        .await
        .unwrap();

    assert_eq!(outcome.duration_minutes, 3);
    let entries = app
        .state
        .list_time_entries
        .handle(&Actor::new("u1"), &control_id)
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].user_id, "u1");
    assert_eq!(entries[0].end_time, Some(app.clock.now()));
    let rows = app
        .outbox
        .rows_for_stream(&format!("ControlRecord-{control_id}"))
        .await;
    let payload = rows[0].payload.clone();
    assert_eq!(payload["stopped_by"], "lead");
}

#[rstest]
#[tokio::test]
async fn a_missing_grant_is_forbidden_even_for_teammates(app: TestApp) {
    let control_id = app.assign("u1", SubjectKind::Todo).await;
    let entry = app.add_manual_entry(&control_id, "u1", 30).await;

    let error = app
        .state
        .delete_manual_time_entry
        .handle(&Actor::new("lead"), &entry.id)
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Forbidden);
}

#[rstest]
#[tokio::test]
async fn an_all_scope_reads_every_record(app: TestApp) {
    let case = app.assign("u1", SubjectKind::Case).await;
    let todo = app.assign("u3", SubjectKind::Todo).await;
    let auditor = Actor::new("auditor");

    assert!(app.state.get_control_record.handle(&auditor, &case).await.is_ok());
    assert!(app.state.get_active_time.handle(&auditor, &todo).await.is_ok());
    let error = app
        .state
        .start_timer
        .handle(&auditor, &todo)
        .await
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Forbidden);
}

#[rstest]
#[tokio::test]
async fn a_replaced_policy_applies_to_the_next_request() {
    let app = TestApp::new();
    let control_id = app.assign("u1", SubjectKind::Todo).await;
    let auditor = Actor::new("auditor");
    assert!(app.state.get_control_record.handle(&auditor, &control_id).await.is_err());

    app.directory
        .replace_policy(AccessPolicy::from_json(TEAM_POLICY).unwrap())
        .await;

    assert!(app.state.get_control_record.handle(&auditor, &control_id).await.is_ok());
}

#[rstest]
#[tokio::test]
async fn a_caller_cannot_assign_records_to_someone_else(app: TestApp) {
    let error = app
        .state
        .assign_control_record
        .handle(
            &Actor::new("lead"),
            AssignControlRecordInput {
                subject_kind: SubjectKind::Case,
                subject_id: Some("case-9".into()),
                user_id: Some("u1".into()),
                status_id: Some("open".into()),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Forbidden);
}

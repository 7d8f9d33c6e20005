use crate::modules::access_control::core::scope::Actor;
use crate::modules::time_tracking::application::errors::ErrorKind;
use crate::modules::time_tracking::core::subject::SubjectKind;
use crate::modules::time_tracking::use_cases::get_control_record::view::ControlRecordView;
use crate::modules::time_tracking::use_cases::list_time_entries::queries_port::TimeEntryQueries;
use crate::tests::fixtures::app::TestApp;
use rstest::{fixture, rstest};

#[fixture]
fn app() -> TestApp {
    TestApp::new()
}

fn assert_timer_consistent(view: &ControlRecordView) {
    assert_eq!(view.is_timer_active, view.timer_start_at.is_some());
}

#[rstest]
#[tokio::test]
async fn timer_fields_agree_after_every_operation(app: TestApp) {
    let actor = Actor::new("u1");
    let control_id = app.assign("u1", SubjectKind::Case).await;
    let timer = &app.state;

    let mut seen = vec![timer.get_control_record.handle(&actor, &control_id).await.unwrap()];
    seen.push(timer.start_timer.handle(&actor, &control_id).await.unwrap());
    app.clock.advance_secs(90);
    seen.push(
        timer
            .stop_timer
            .stop(&actor, &control_id, None)
            .await
            .unwrap()
            .control_record,
    );
    seen.push(timer.start_timer.handle(&actor, &control_id).await.unwrap());
    seen.push(
        timer
            .change_status
            .handle(&actor, &control_id, Some("in-progress"), false)
            .await
            .unwrap(),
    );
    app.clock.advance_secs(30);
    seen.push(
        timer
            .stop_timer
            .pause(&actor, &control_id, None)
            .await
            .unwrap()
            .control_record,
    );

    seen.iter().for_each(assert_timer_consistent);
    let last = seen.last().unwrap();
    assert!(!last.is_timer_active);
    assert_eq!(last.total_time_minutes, 3);
}

#[rstest]
#[tokio::test]
async fn an_immediate_stop_rounds_to_zero_minutes(app: TestApp) {
    let actor = Actor::new("u1");
    let control_id = app.assign("u1", SubjectKind::Todo).await;
    app.state.start_timer.handle(&actor, &control_id).await.unwrap();

    let outcome = app
        .state
        .stop_timer
        .stop(&actor, &control_id, None)
        .await
        .unwrap();

    assert_eq!(outcome.duration_minutes, 0);
    assert_eq!(outcome.total_minutes, 0);
    assert_eq!(outcome.control_record.total_time_minutes, 0);
}

#[rstest]
#[tokio::test]
async fn a_second_start_is_rejected_without_touching_the_total(app: TestApp) {
    let actor = Actor::new("u1");
    let control_id = app.assign("u1", SubjectKind::Case).await;
    app.state.start_timer.handle(&actor, &control_id).await.unwrap();
    app.clock.advance_secs(600);
    app.state.stop_timer.stop(&actor, &control_id, None).await.unwrap();
    app.state.start_timer.handle(&actor, &control_id).await.unwrap();

    let error = app
        .state
        .start_timer
        .handle(&actor, &control_id)
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::InvalidState);
    let record = app
        .state
        .get_control_record
        .handle(&actor, &control_id)
        .await
        .unwrap();
    assert_eq!(record.total_time_minutes, 10);
}

#[rstest]
#[tokio::test]
async fn a_stop_on_an_idle_record_leaves_no_trace(app: TestApp) {
    let actor = Actor::new("u1");
    let control_id = app.assign("u1", SubjectKind::Todo).await;

    let error = app
        .state
        .stop_timer
        .stop(&actor, &control_id, None)
        .await
        .unwrap_err();

    assert_eq!(error.kind(), ErrorKind::InvalidState);
    let entries = TimeEntryQueries::list_by_control_id(&*app.projections, &control_id)
        .await
        .unwrap();
    assert!(entries.is_empty());
    assert!(app.outbox.rows().await.is_empty());
}

#[rstest]
#[case(99, false)]
#[case(100, true)]
#[tokio::test]
async fn a_session_description_needs_one_hundred_characters(
    app: TestApp,
    #[case] length: usize,
    #[case] accepted: bool,
) {
    let actor = Actor::new("u1");
    let control_id = app.assign("u1", SubjectKind::Case).await;
    app.state.start_timer.handle(&actor, &control_id).await.unwrap();
    let description = format!("  {}  ", "d".repeat(length));

    let result = app
        .state
        .stop_timer
        .stop(&actor, &control_id, Some(&description))
        .await;

    match result {
        Ok(outcome) => {
            assert!(accepted);
            assert_eq!(outcome.description, Some("d".repeat(length)));
        }
        Err(error) => {
            assert!(!accepted);
            assert_eq!(error.kind(), ErrorKind::Validation);
        }
    }
}

#[rstest]
#[tokio::test]
async fn the_live_session_never_shrinks_while_running(app: TestApp) {
    let actor = Actor::new("u1");
    let control_id = app.assign("u1", SubjectKind::Todo).await;
    app.state.start_timer.handle(&actor, &control_id).await.unwrap();

    let mut readings = Vec::new();
    for step in [0, 20, 15, 45, 0, 120] {
        app.clock.advance_secs(step);
        let view = app
            .state
            .get_active_time
            .handle(&actor, &control_id)
            .await
            .unwrap();
        readings.push(view.current_session_minutes);
    }

    assert!(readings.windows(2).all(|pair| pair[0] <= pair[1]));
    assert_eq!(readings.last(), Some(&3));
}

#[rstest]
#[tokio::test]
async fn stopping_after_125_seconds_accounts_two_minutes(app: TestApp) {
    let actor = Actor::new("u1");
    let control_id = app.assign("u1", SubjectKind::Case).await;
    app.state.start_timer.handle(&actor, &control_id).await.unwrap();
    app.clock.advance_secs(125);

    let outcome = app
        .state
        .stop_timer
        .stop(&actor, &control_id, None)
        .await
        .unwrap();

    assert_eq!(outcome.duration_minutes, 2);
    assert!(!outcome.control_record.is_timer_active);
    assert_eq!(outcome.control_record.timer_start_at, None);
    let entries = TimeEntryQueries::list_by_control_id(&*app.projections, &control_id)
        .await
        .unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].duration_minutes, 2);
    assert_eq!(entries[0].end_time, Some(app.clock.now()));
    assert_eq!(app.outbox.event_types().await, vec!["TimerStopped"]);
}

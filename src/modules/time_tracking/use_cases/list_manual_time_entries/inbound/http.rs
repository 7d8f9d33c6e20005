use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::modules::time_tracking::core::subject::SubjectKind;
use crate::shell::auth::CurrentActor;
use crate::shell::state::AppState;

pub async fn handle_for_todo(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(control_id): Path<String>,
) -> Response {
    let result = state
        .list_manual_time_entries
        .handle(&actor, &control_id, Some(SubjectKind::Todo))
        .await;
    state.respond(result)
}

pub async fn handle_for_case(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(control_id): Path<String>,
) -> Response {
    let result = state
        .list_manual_time_entries
        .handle(&actor, &control_id, Some(SubjectKind::Case))
        .await;
    state.respond(result)
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(control_id): Path<String>,
) -> Response {
    let result = state
        .list_manual_time_entries
        .handle(&actor, &control_id, None)
        .await;
    state.respond(result)
}

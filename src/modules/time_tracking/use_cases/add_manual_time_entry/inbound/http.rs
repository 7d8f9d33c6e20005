use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::Response,
};
use serde::Deserialize;
use serde_json::Value;

use crate::modules::access_control::core::scope::Actor;
use crate::modules::time_tracking::core::subject::SubjectKind;
use crate::modules::time_tracking::use_cases::add_manual_time_entry::command::AddManualTimeEntryInput;
use crate::shell::auth::CurrentActor;
use crate::shell::response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddManualTimeEntryBody {
    pub description: Option<String>,
    pub duration_minutes: Option<Value>,
    pub date: Option<String>,
    pub user_id: Option<String>,
}

pub async fn handle_for_todo(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(control_id): Path<String>,
    body: Result<Json<AddManualTimeEntryBody>, JsonRejection>,
) -> Response {
    add(state, actor, control_id, Some(SubjectKind::Todo), body).await
}

pub async fn handle_for_case(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(control_id): Path<String>,
    body: Result<Json<AddManualTimeEntryBody>, JsonRejection>,
) -> Response {
    add(state, actor, control_id, Some(SubjectKind::Case), body).await
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(control_id): Path<String>,
    body: Result<Json<AddManualTimeEntryBody>, JsonRejection>,
) -> Response {
    add(state, actor, control_id, None, body).await
}

async fn add(
    state: AppState,
    actor: Actor,
    control_id: String,
    expected_kind: Option<SubjectKind>,
    body: Result<Json<AddManualTimeEntryBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return response::bad_request(rejection.body_text()),
    };
    let input = AddManualTimeEntryInput {
        description: body.description,
        duration_minutes: body.duration_minutes,
        date: body.date,
        user_id: body.user_id,
    };
    match state
        .add_manual_time_entry
        .handle(&actor, &control_id, expected_kind, input)
        .await
    {
        Ok(entry) => response::created(entry),
        Err(error) => state.fail(&error),
    }
}

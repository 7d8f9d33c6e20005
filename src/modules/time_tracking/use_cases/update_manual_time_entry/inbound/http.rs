use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::Response,
};
use serde::Deserialize;
use serde_json::Value;

use crate::modules::time_tracking::use_cases::update_manual_time_entry::command::UpdateManualTimeEntryInput;
use crate::shell::auth::CurrentActor;
use crate::shell::response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateManualTimeEntryBody {
    pub description: Option<String>,
    pub duration_minutes: Option<Value>,
    pub date: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(entry_id): Path<String>,
    body: Result<Json<UpdateManualTimeEntryBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return response::bad_request(rejection.body_text()),
    };
    let input = UpdateManualTimeEntryInput {
        description: body.description,
        duration_minutes: body.duration_minutes,
        date: body.date,
    };
    let result = state
        .update_manual_time_entry
        .handle(&actor, &entry_id, input)
        .await;
    state.respond(result)
}

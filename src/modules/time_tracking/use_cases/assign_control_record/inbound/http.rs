use axum::{Json, extract::State, extract::rejection::JsonRejection, response::Response};
use serde::Deserialize;

use crate::modules::time_tracking::core::subject::SubjectKind;
use crate::modules::time_tracking::use_cases::assign_control_record::command::AssignControlRecordInput;
use crate::shell::auth::CurrentActor;
use crate::shell::response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignControlRecordBody {
    pub subject_kind: SubjectKind,
    pub subject_id: Option<String>,
    pub user_id: Option<String>,
    pub status_id: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    body: Result<Json<AssignControlRecordBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return response::bad_request(rejection.body_text()),
    };
    let input = AssignControlRecordInput {
        subject_kind: body.subject_kind,
        subject_id: body.subject_id,
        user_id: body.user_id,
        status_id: body.status_id,
    };
    match state.assign_control_record.handle(&actor, input).await {
        Ok(view) => response::created(view),
        Err(error) => state.fail(&error),
    }
}

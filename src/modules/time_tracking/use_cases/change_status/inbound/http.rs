use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::Response,
};
use serde::Deserialize;

use crate::shell::auth::CurrentActor;
use crate::shell::response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeStatusBody {
    pub status_id: Option<String>,
    #[serde(default)]
    pub completed: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(control_id): Path<String>,
    body: Result<Json<ChangeStatusBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return response::bad_request(rejection.body_text()),
    };
    let result = state
        .change_status
        .handle(&actor, &control_id, body.status_id.as_deref(), body.completed)
        .await;
    state.respond(result)
}

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::Response,
};
use serde::Deserialize;

use crate::modules::access_control::core::scope::Actor;
use crate::modules::time_tracking::core::events::v1::timer_stopped::StopReason;
use crate::modules::time_tracking::core::validation::required_text;
use crate::shell::auth::CurrentActor;
use crate::shell::response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTimerBody {
    #[serde(alias = "caseControlId", alias = "todoControlId")]
    pub control_id: Option<String>,
    pub description: Option<String>,
}

pub async fn handle_stop(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    body: Result<Json<StopTimerBody>, JsonRejection>,
) -> Response {
    close_session(state, actor, body, StopReason::Stop).await
}

pub async fn handle_pause(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    body: Result<Json<StopTimerBody>, JsonRejection>,
) -> Response {
    close_session(state, actor, body, StopReason::Pause).await
}

async fn close_session(
    state: AppState,
    actor: Actor,
    body: Result<Json<StopTimerBody>, JsonRejection>,
    reason: StopReason,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return response::bad_request(rejection.body_text()),
    };
    let control_id = match required_text("controlId", body.control_id.as_deref()) {
        Ok(id) => id,
        Err(error) => return state.fail(&error.into()),
    };
    let result = state
        .stop_timer
        .handle(&actor, &control_id, body.description.as_deref(), reason)
        .await;
    state.respond(result)
}

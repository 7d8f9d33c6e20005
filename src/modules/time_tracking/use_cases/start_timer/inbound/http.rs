use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::Response,
};
use serde::Deserialize;

use crate::modules::time_tracking::core::validation::required_text;
use crate::shell::auth::CurrentActor;
use crate::shell::response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StartTimerBody {
    #[serde(alias = "caseControlId", alias = "todoControlId")]
    pub control_id: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    body: Result<Json<StartTimerBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return response::bad_request(rejection.body_text()),
    };
    let control_id = match required_text("controlId", body.control_id.as_deref()) {
        Ok(id) => id,
        Err(error) => return state.fail(&error.into()),
    };
    let result = state.start_timer.handle(&actor, &control_id).await;
    state.respond(result)
}

use axum::{
    extract::{Path, State},
    response::Response,
};

use crate::shell::auth::CurrentActor;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(control_id): Path<String>,
) -> Response {
    let result = state.list_time_entries.handle(&actor, &control_id).await;
    state.respond(result)
}

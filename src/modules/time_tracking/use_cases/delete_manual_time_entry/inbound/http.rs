use axum::{
    extract::{Path, State},
    response::Response,
};
use serde::Serialize;

use crate::shell::auth::CurrentActor;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct DeletedBody {
    pub deleted: bool,
}

pub async fn handle(
    State(state): State<AppState>,
    CurrentActor(actor): CurrentActor,
    Path(entry_id): Path<String>,
) -> Response {
    let result = state
        .delete_manual_time_entry
        .handle(&actor, &entry_id)
        .await
        .map(|deleted| DeletedBody { deleted });
    state.respond(result)
}

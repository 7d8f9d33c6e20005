use axum::{
    Json, Router,
    routing::{get, post, put},
};
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::time_tracking::use_cases::add_manual_time_entry::inbound::http as add_manual_http;
use crate::modules::time_tracking::use_cases::assign_control_record::inbound::http as assign_http;
use crate::modules::time_tracking::use_cases::change_status::inbound::http as change_status_http;
use crate::modules::time_tracking::use_cases::delete_manual_time_entry::inbound::http as delete_manual_http;
use crate::modules::time_tracking::use_cases::get_active_time::inbound::http as active_time_http;
use crate::modules::time_tracking::use_cases::get_control_record::inbound::http as get_control_http;
use crate::modules::time_tracking::use_cases::list_manual_time_entries::inbound::http as list_manual_http;
use crate::modules::time_tracking::use_cases::list_time_entries::inbound::http as list_time_entries_http;
use crate::modules::time_tracking::use_cases::start_timer::inbound::http as start_http;
use crate::modules::time_tracking::use_cases::stop_timer::inbound::http as stop_http;
use crate::modules::time_tracking::use_cases::update_manual_time_entry::inbound::http as update_manual_http;
use crate::shell::graphql;
use crate::shell::state::AppState;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/controls", post(assign_http::handle))
        .route("/controls/{control_id}", get(get_control_http::handle))
        .route(
            "/controls/{control_id}/status",
            put(change_status_http::handle),
        )
        .route(
            "/controls/{control_id}/time-entries",
            get(list_time_entries_http::handle),
        )
        .route(
            "/controls/{control_id}/manual-time-entries",
            get(list_manual_http::handle).post(add_manual_http::handle),
        )
        .route(
            "/todos/{control_id}/manual-time-entries",
            get(list_manual_http::handle_for_todo).post(add_manual_http::handle_for_todo),
        )
        .route(
            "/cases/{control_id}/manual-time-entries",
            get(list_manual_http::handle_for_case).post(add_manual_http::handle_for_case),
        )
        .route(
            "/manual-time-entries/{entry_id}",
            put(update_manual_http::handle).delete(delete_manual_http::handle),
        )
        .route("/timer/start", post(start_http::handle))
        .route("/timer/stop", post(stop_http::handle_stop))
        .route("/timer/pause", post(stop_http::handle_pause))
        .route("/timer/active/{control_id}", get(active_time_http::handle))
        .with_state(state.clone())
        .merge(graphql::router(state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

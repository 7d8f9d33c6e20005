use async_graphql::{
    Context, EmptySubscription, Error, ErrorExtensions, MergedObject, Schema,
    http::GraphiQLSource,
};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    Router,
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse},
    routing::get,
};

use crate::modules::access_control::core::scope::Actor;
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::use_cases::add_manual_time_entry::inbound::graphql::AddManualTimeEntryMutation;
use crate::modules::time_tracking::use_cases::assign_control_record::inbound::graphql::AssignControlRecordMutation;
use crate::modules::time_tracking::use_cases::change_status::inbound::graphql::ChangeStatusMutation;
use crate::modules::time_tracking::use_cases::delete_manual_time_entry::inbound::graphql::DeleteManualTimeEntryMutation;
use crate::modules::time_tracking::use_cases::get_active_time::inbound::graphql::ActiveTimeQuery;
use crate::modules::time_tracking::use_cases::get_control_record::inbound::graphql::ControlRecordQuery;
use crate::modules::time_tracking::use_cases::list_manual_time_entries::inbound::graphql::ManualTimeEntriesQuery;
use crate::modules::time_tracking::use_cases::list_time_entries::inbound::graphql::TimeEntriesQuery;
use crate::modules::time_tracking::use_cases::start_timer::inbound::graphql::StartTimerMutation;
use crate::modules::time_tracking::use_cases::stop_timer::inbound::graphql::StopTimerMutation;
use crate::modules::time_tracking::use_cases::update_manual_time_entry::inbound::graphql::UpdateManualTimeEntryMutation;
use crate::shell::auth::actor_from_headers;
use crate::shell::response;
use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    ControlRecordQuery,
    ActiveTimeQuery,
    TimeEntriesQuery,
    ManualTimeEntriesQuery,
);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    AssignControlRecordMutation,
    ChangeStatusMutation,
    StartTimerMutation,
    StopTimerMutation,
    AddManualTimeEntryMutation,
    UpdateManualTimeEntryMutation,
    DeleteManualTimeEntryMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(
        QueryRoot::default(),
        MutationRoot::default(),
        EmptySubscription,
    )
    .data(state)
    .finish()
}

/// The caller attached to the request, or an `UNAUTHENTICATED` error.
pub fn current_actor<'a>(context: &Context<'a>) -> async_graphql::Result<&'a Actor> {
    context.data_opt::<Actor>().ok_or_else(|| {
        Error::new("missing caller identity").extend_with(|_, e| e.set("code", "UNAUTHENTICATED"))
    })
}

pub fn to_gql_error(state: &AppState, failure: ApplicationError) -> Error {
    let code = failure.kind().code();
    Error::new(response::public_message(
        &failure,
        state.expose_internal_errors,
    ))
    .extend_with(|_, e| e.set("code", code))
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

async fn execute(
    State(schema): State<AppSchema>,
    headers: HeaderMap,
    request: GraphQLRequest,
) -> GraphQLResponse {
    let mut request = request.into_inner();
    if let Some(actor) = actor_from_headers(&headers) {
        request = request.data(actor);
    }
    schema.execute(request).await.into()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(execute))
        .with_state(build_schema(state))
}

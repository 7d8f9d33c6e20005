use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::time_tracking::use_cases::list_time_entries::projection::TimeEntryView;
use crate::shell::graphql::{current_actor, to_gql_error};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlTimeEntry {
    pub id: ID,
    pub control_id: String,
    pub user_id: String,
    pub start_time: i64,
    pub end_time: Option<i64>,
    pub duration_minutes: i64,
    pub description: Option<String>,
}

impl From<TimeEntryView> for GqlTimeEntry {
    fn from(v: TimeEntryView) -> Self {
        Self {
            id: ID(v.id),
            control_id: v.control_id,
            user_id: v.user_id,
            start_time: v.start_time,
            end_time: v.end_time,
            duration_minutes: v.duration_minutes,
            description: v.description,
        }
    }
}

#[derive(Default)]
pub struct TimeEntriesQuery;

#[Object]
impl TimeEntriesQuery {
    async fn time_entries(
        &self,
        context: &Context<'_>,
        control_id: ID,
    ) -> GqlResult<Vec<GqlTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        let actor = current_actor(context)?;
        state
            .list_time_entries
            .handle(actor, &control_id)
            .await
            .map(|entries| entries.into_iter().map(Into::into).collect())
            .map_err(|e| to_gql_error(state, e))
    }
}

use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::time_tracking::use_cases::list_manual_time_entries::projection::ManualTimeEntryView;
use crate::shell::graphql::{current_actor, to_gql_error};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlManualTimeEntry {
    pub id: ID,
    pub control_id: String,
    pub user_id: String,
    /// YYYY-MM-DD
    pub date: String,
    pub duration_minutes: i64,
    pub description: String,
    pub created_at: i64,
    pub created_by: String,
    pub updated_at: i64,
}

impl From<ManualTimeEntryView> for GqlManualTimeEntry {
    fn from(v: ManualTimeEntryView) -> Self {
        Self {
            id: ID(v.id),
            control_id: v.control_id,
            user_id: v.user_id,
            date: v.date.format("%Y-%m-%d").to_string(),
            duration_minutes: v.duration_minutes,
            description: v.description,
            created_at: v.created_at,
            created_by: v.created_by,
            updated_at: v.updated_at,
        }
    }
}

#[derive(Default)]
pub struct ManualTimeEntriesQuery;

#[Object]
impl ManualTimeEntriesQuery {
    async fn manual_time_entries(
        &self,
        context: &Context<'_>,
        control_id: ID,
    ) -> GqlResult<Vec<GqlManualTimeEntry>> {
        let state = context.data_unchecked::<AppState>();
        let actor = current_actor(context)?;
        state
            .list_manual_time_entries
            .handle(actor, &control_id, None)
            .await
            .map(|entries| entries.into_iter().map(Into::into).collect())
            .map_err(|e| to_gql_error(state, e))
    }
}

use async_graphql::{Context, ID, Object, Result as GqlResult};
use serde_json::json;

use crate::modules::time_tracking::use_cases::list_manual_time_entries::inbound::graphql::GqlManualTimeEntry;
use crate::modules::time_tracking::use_cases::update_manual_time_entry::command::UpdateManualTimeEntryInput;
use crate::shell::graphql::{current_actor, to_gql_error};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateManualTimeEntryMutation;

#[Object]
impl UpdateManualTimeEntryMutation {
    async fn update_manual_time_entry(
        &self,
        context: &Context<'_>,
        entry_id: ID,
        description: Option<String>,
        duration_minutes: Option<i64>,
        date: Option<String>,
    ) -> GqlResult<GqlManualTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let actor = current_actor(context)?;
        let input = UpdateManualTimeEntryInput {
            description,
            duration_minutes: duration_minutes.map(|minutes| json!(minutes)),
            date,
        };
        state
            .update_manual_time_entry
            .handle(actor, &entry_id, input)
            .await
            .map(Into::into)
            .map_err(|e| to_gql_error(state, e))
    }
}

use async_graphql::{Context, ID, Object, Result as GqlResult};
use serde_json::json;

use crate::modules::time_tracking::use_cases::add_manual_time_entry::command::AddManualTimeEntryInput;
use crate::modules::time_tracking::use_cases::list_manual_time_entries::inbound::graphql::GqlManualTimeEntry;
use crate::shell::graphql::{current_actor, to_gql_error};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AddManualTimeEntryMutation;

#[Object]
impl AddManualTimeEntryMutation {
    async fn add_manual_time_entry(
        &self,
        context: &Context<'_>,
        control_id: ID,
        description: String,
        duration_minutes: i64,
        date: String,
        user_id: String,
    ) -> GqlResult<GqlManualTimeEntry> {
        let state = context.data_unchecked::<AppState>();
        let actor = current_actor(context)?;
        let input = AddManualTimeEntryInput {
            description: Some(description),
            duration_minutes: Some(json!(duration_minutes)),
            date: Some(date),
            user_id: Some(user_id),
        };
        state
            .add_manual_time_entry
            .handle(actor, &control_id, None, input)
            .await
            .map(Into::into)
            .map_err(|e| to_gql_error(state, e))
    }
}

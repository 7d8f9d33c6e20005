use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::shell::graphql::{current_actor, to_gql_error};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteManualTimeEntryMutation;

#[Object]
impl DeleteManualTimeEntryMutation {
    /// `false` when the entry did not exist.
    async fn delete_manual_time_entry(
        &self,
        context: &Context<'_>,
        entry_id: ID,
    ) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let actor = current_actor(context)?;
        state
            .delete_manual_time_entry
            .handle(actor, &entry_id)
            .await
            .map_err(|e| to_gql_error(state, e))
    }
}

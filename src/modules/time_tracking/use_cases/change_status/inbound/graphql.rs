use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::time_tracking::use_cases::get_control_record::inbound::graphql::GqlControlRecord;
use crate::shell::graphql::{current_actor, to_gql_error};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ChangeStatusMutation;

#[Object]
impl ChangeStatusMutation {
    async fn change_control_status(
        &self,
        context: &Context<'_>,
        control_id: ID,
        status_id: String,
        completed: bool,
    ) -> GqlResult<GqlControlRecord> {
        let state = context.data_unchecked::<AppState>();
        let actor = current_actor(context)?;
        state
            .change_status
            .handle(actor, &control_id, Some(status_id.as_str()), completed)
            .await
            .map(Into::into)
            .map_err(|e| to_gql_error(state, e))
    }
}

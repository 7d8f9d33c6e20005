use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::time_tracking::use_cases::get_control_record::inbound::graphql::GqlControlRecord;
use crate::shell::graphql::{current_actor, to_gql_error};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct StartTimerMutation;

#[Object]
impl StartTimerMutation {
    async fn start_timer(&self, context: &Context<'_>, control_id: ID) -> GqlResult<GqlControlRecord> {
        let state = context.data_unchecked::<AppState>();
        let actor = current_actor(context)?;
        state
            .start_timer
            .handle(actor, &control_id)
            .await
            .map(Into::into)
            .map_err(|e| to_gql_error(state, e))
    }
}

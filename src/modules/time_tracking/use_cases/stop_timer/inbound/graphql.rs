use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::time_tracking::use_cases::get_control_record::inbound::graphql::GqlControlRecord;
use crate::modules::time_tracking::use_cases::stop_timer::view::StopTimerOutcome;
use crate::shell::graphql::{current_actor, to_gql_error};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlStopTimerOutcome {
    #[graphql(name = "caseControl")]
    pub control_record: GqlControlRecord,
    pub duration_minutes: i64,
    pub total_minutes: i64,
    pub description: Option<String>,
}

impl From<StopTimerOutcome> for GqlStopTimerOutcome {
    fn from(v: StopTimerOutcome) -> Self {
        Self {
            control_record: v.control_record.into(),
            duration_minutes: v.duration_minutes,
            total_minutes: v.total_minutes,
            description: v.description,
        }
    }
}

#[derive(Default)]
pub struct StopTimerMutation;

#[Object]
impl StopTimerMutation {
    async fn stop_timer(
        &self,
        context: &Context<'_>,
        control_id: ID,
        description: Option<String>,
    ) -> GqlResult<GqlStopTimerOutcome> {
        let state = context.data_unchecked::<AppState>();
        let actor = current_actor(context)?;
        state
            .stop_timer
            .stop(actor, &control_id, description.as_deref())
            .await
            .map(Into::into)
            .map_err(|e| to_gql_error(state, e))
    }

    async fn pause_timer(
        &self,
        context: &Context<'_>,
        control_id: ID,
        description: Option<String>,
    ) -> GqlResult<GqlStopTimerOutcome> {
        let state = context.data_unchecked::<AppState>();
        let actor = current_actor(context)?;
        state
            .stop_timer
            .pause(actor, &control_id, description.as_deref())
            .await
            .map(Into::into)
            .map_err(|e| to_gql_error(state, e))
    }
}

use async_graphql::{Context, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::time_tracking::use_cases::get_active_time::view::ActiveTimeView;
use crate::shell::graphql::{current_actor, to_gql_error};
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlActiveTime {
    pub is_timer_active: bool,
    pub timer_start_at: Option<i64>,
    pub total_time_minutes: i64,
    pub current_session_minutes: i64,
}

impl From<ActiveTimeView> for GqlActiveTime {
    fn from(v: ActiveTimeView) -> Self {
        Self {
            is_timer_active: v.is_timer_active,
            timer_start_at: v.timer_start_at,
            total_time_minutes: v.total_time_minutes,
            current_session_minutes: v.current_session_minutes,
        }
    }
}

#[derive(Default)]
pub struct ActiveTimeQuery;

#[Object]
impl ActiveTimeQuery {
    async fn active_time(&self, context: &Context<'_>, control_id: ID) -> GqlResult<GqlActiveTime> {
        let state = context.data_unchecked::<AppState>();
        let actor = current_actor(context)?;
        state
            .get_active_time
            .handle(actor, &control_id)
            .await
            .map(Into::into)
            .map_err(|e| to_gql_error(state, e))
    }
}

use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::time_tracking::use_cases::assign_control_record::command::AssignControlRecordInput;
use crate::modules::time_tracking::use_cases::get_control_record::inbound::graphql::{
    GqlControlRecord, GqlSubjectKind,
};
use crate::shell::graphql::{current_actor, to_gql_error};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct AssignControlRecordMutation;

#[Object]
impl AssignControlRecordMutation {
    async fn assign_control_record(
        &self,
        context: &Context<'_>,
        subject_kind: GqlSubjectKind,
        subject_id: String,
        user_id: String,
        status_id: String,
    ) -> GqlResult<GqlControlRecord> {
        let state = context.data_unchecked::<AppState>();
        let actor = current_actor(context)?;
        let input = AssignControlRecordInput {
            subject_kind: subject_kind.into(),
            subject_id: Some(subject_id),
            user_id: Some(user_id),
            status_id: Some(status_id),
        };
        state
            .assign_control_record
            .handle(actor, input)
            .await
            .map(Into::into)
            .map_err(|e| to_gql_error(state, e))
    }
}

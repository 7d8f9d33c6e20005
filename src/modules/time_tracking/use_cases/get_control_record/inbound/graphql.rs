use async_graphql::{Context, Enum, ID, Object, Result as GqlResult, SimpleObject};

use crate::modules::time_tracking::core::subject::SubjectKind;
use crate::modules::time_tracking::use_cases::get_control_record::view::ControlRecordView;
use crate::shell::graphql::{current_actor, to_gql_error};
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Eq, PartialEq, Debug)]
pub enum GqlSubjectKind {
    Case,
    Todo,
}

impl From<GqlSubjectKind> for SubjectKind {
    fn from(kind: GqlSubjectKind) -> Self {
        match kind {
            GqlSubjectKind::Case => SubjectKind::Case,
            GqlSubjectKind::Todo => SubjectKind::Todo,
        }
    }
}

impl From<SubjectKind> for GqlSubjectKind {
    fn from(kind: SubjectKind) -> Self {
        match kind {
            SubjectKind::Case => GqlSubjectKind::Case,
            SubjectKind::Todo => GqlSubjectKind::Todo,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlControlRecord {
    pub id: ID,
    pub subject_kind: GqlSubjectKind,
    pub subject_id: String,
    pub user_id: String,
    pub status_id: String,
    pub total_time_minutes: i64,
    pub is_timer_active: bool,
    pub timer_start_at: Option<i64>,
    pub started_at: Option<i64>,
    pub completed_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<ControlRecordView> for GqlControlRecord {
    fn from(v: ControlRecordView) -> Self {
        Self {
            id: ID(v.id),
            subject_kind: v.subject_kind.into(),
            subject_id: v.subject_id,
            user_id: v.user_id,
            status_id: v.status_id,
            total_time_minutes: v.total_time_minutes,
            is_timer_active: v.is_timer_active,
            timer_start_at: v.timer_start_at,
            started_at: v.started_at,
            completed_at: v.completed_at,
            created_at: v.created_at,
            updated_at: v.updated_at,
        }
    }
}

#[derive(Default)]
pub struct ControlRecordQuery;

#[Object]
impl ControlRecordQuery {
    async fn control_record(
        &self,
        context: &Context<'_>,
        control_id: ID,
    ) -> GqlResult<GqlControlRecord> {
        let state = context.data_unchecked::<AppState>();
        let actor = current_actor(context)?;
        state
            .get_control_record
            .handle(actor, &control_id)
            .await
            .map(Into::into)
            .map_err(|e| to_gql_error(state, e))
    }
}

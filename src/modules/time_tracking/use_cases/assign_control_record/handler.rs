use crate::modules::access_control::authorizer::Authorizer;
use crate::modules::access_control::core::scope::{Action, Actor, Permission};
use crate::modules::time_tracking::application::control_streams::{
    ControlStreams, require_record,
};
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::events::TimeTrackingEvent;
use crate::modules::time_tracking::core::validation::{Validator, required_text};
use crate::modules::time_tracking::use_cases::assign_control_record::command::{
    AssignControlRecord, AssignControlRecordInput,
};
use crate::modules::time_tracking::use_cases::assign_control_record::decide::decide_assign;
use crate::modules::time_tracking::use_cases::get_control_record::view::ControlRecordView;
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub struct AssignControlRecordHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeTrackingEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    streams: Arc<ControlStreams<TEventStore, TOutbox>>,
    authorizer: Arc<Authorizer>,
    clock: Arc<dyn Clock>,
}

impl<TEventStore, TOutbox> AssignControlRecordHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeTrackingEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        streams: Arc<ControlStreams<TEventStore, TOutbox>>,
        authorizer: Arc<Authorizer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            streams,
            authorizer,
            clock,
        }
    }

    pub async fn handle(
        &self,
        actor: &Actor,
        input: AssignControlRecordInput,
    ) -> Result<ControlRecordView, ApplicationError> {
        let mut validator = Validator::new();
        let subject_id = validator.check(required_text("subjectId", input.subject_id.as_deref()));
        let user_id = validator.check(required_text("userId", input.user_id.as_deref()));
        let status_id = validator.check(required_text("statusId", input.status_id.as_deref()));
        let ((subject_id, user_id), status_id) =
            validator.finish(subject_id.zip(user_id).zip(status_id))?;

        self.authorizer
            .authorize(
                actor,
                Permission::new(input.subject_kind.module(), Action::Create),
                &user_id,
            )
            .await?;

        let control_id = Uuid::now_v7().to_string();
        let command = AssignControlRecord {
            control_id: control_id.clone(),
            subject_kind: input.subject_kind,
            subject_id,
            user_id,
            status_id,
            assigned_at: self.clock.now_millis(),
            assigned_by: actor.user_id.clone(),
        };
        let loaded = self.streams.load(&control_id).await?;
        let decision = decide_assign(&loaded.state, command);
        let state = self.streams.commit(&control_id, loaded, decision).await?;
        let record = require_record(&state)?;
        info!(
            control_id = %record.control_id,
            subject_kind = record.subject_kind.as_str(),
            user_id = %record.user_id,
            "control record assigned"
        );
        Ok(ControlRecordView::from(record))
    }
}

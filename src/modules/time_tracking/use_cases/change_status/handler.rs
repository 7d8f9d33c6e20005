use crate::modules::access_control::authorizer::Authorizer;
use crate::modules::access_control::core::scope::{Action, Actor, Permission};
use crate::modules::time_tracking::application::control_streams::{
    ControlStreams, require_record,
};
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::events::TimeTrackingEvent;
use crate::modules::time_tracking::core::validation::required_text;
use crate::modules::time_tracking::use_cases::change_status::command::ChangeStatus;
use crate::modules::time_tracking::use_cases::change_status::decide::decide_change_status;
use crate::modules::time_tracking::use_cases::get_control_record::view::ControlRecordView;
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::info;

pub struct ChangeStatusHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeTrackingEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    streams: Arc<ControlStreams<TEventStore, TOutbox>>,
    authorizer: Arc<Authorizer>,
    clock: Arc<dyn Clock>,
}

impl<TEventStore, TOutbox> ChangeStatusHandler<TEventStore, TOutbox>
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
        control_id: &str,
        status_id: Option<&str>,
        completed: bool,
    ) -> Result<ControlRecordView, ApplicationError> {
        let loaded = self.streams.load(control_id).await?;
        let record = loaded.require_record()?;
        self.authorizer
            .authorize(
                actor,
                Permission::new(record.subject_kind.module(), Action::Update),
                &record.user_id,
            )
            .await?;
        let status_id = required_text("statusId", status_id)?;

        let command = ChangeStatus {
            control_id: control_id.to_string(),
            status_id,
            completed,
            changed_at: self.clock.now_millis(),
            changed_by: actor.user_id.clone(),
        };
        let decision = decide_change_status(&loaded.state, command);
        let state = self.streams.commit(control_id, loaded, decision).await?;
        let record = require_record(&state)?;
        info!(
            control_id,
            status_id = %record.status_id,
            completed = record.completed_at.is_some(),
            "control status changed"
        );
        Ok(ControlRecordView::from(record))
    }
}

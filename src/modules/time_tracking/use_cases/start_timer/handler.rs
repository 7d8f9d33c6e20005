use crate::modules::access_control::authorizer::Authorizer;
use crate::modules::access_control::core::scope::{Action, Actor, Permission};
use crate::modules::time_tracking::application::control_streams::{
    ControlStreams, require_record,
};
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::events::TimeTrackingEvent;
use crate::modules::time_tracking::use_cases::get_control_record::view::ControlRecordView;
use crate::modules::time_tracking::use_cases::start_timer::command::StartTimer;
use crate::modules::time_tracking::use_cases::start_timer::decide::decide_start;
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub struct StartTimerHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeTrackingEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    streams: Arc<ControlStreams<TEventStore, TOutbox>>,
    authorizer: Arc<Authorizer>,
    clock: Arc<dyn Clock>,
}

impl<TEventStore, TOutbox> StartTimerHandler<TEventStore, TOutbox>
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

        let command = StartTimer {
            control_id: control_id.to_string(),
            time_entry_id: Uuid::now_v7().to_string(),
            user_id: actor.user_id.clone(),
            started_at: self.clock.now_millis(),
        };
        let decision = decide_start(&loaded.state, command);
        let state = self.streams.commit(control_id, loaded, decision).await?;
        let record = require_record(&state)?;
        info!(control_id, user_id = %actor.user_id, "timer started");
        Ok(ControlRecordView::from(record))
    }
}

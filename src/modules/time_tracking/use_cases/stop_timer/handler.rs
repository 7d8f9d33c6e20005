use crate::modules::access_control::authorizer::Authorizer;
use crate::modules::access_control::core::scope::{Action, Actor, Permission};
use crate::modules::time_tracking::application::control_streams::{
    ControlStreams, require_record,
};
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::events::TimeTrackingEvent;
use crate::modules::time_tracking::core::events::v1::timer_stopped::StopReason;
use crate::modules::time_tracking::core::validation::optional_session_description;
use crate::modules::time_tracking::use_cases::get_control_record::view::ControlRecordView;
use crate::modules::time_tracking::use_cases::stop_timer::command::StopTimer;
use crate::modules::time_tracking::use_cases::stop_timer::decide::decide_stop;
use crate::modules::time_tracking::use_cases::stop_timer::view::StopTimerOutcome;
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::info;

/// Serves both `stop` and `pause`; they differ only in the recorded reason.
pub struct StopTimerHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeTrackingEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    streams: Arc<ControlStreams<TEventStore, TOutbox>>,
    authorizer: Arc<Authorizer>,
    clock: Arc<dyn Clock>,
}

impl<TEventStore, TOutbox> StopTimerHandler<TEventStore, TOutbox>
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

    pub async fn stop(
        &self,
        actor: &Actor,
        control_id: &str,
        description: Option<&str>,
    ) -> Result<StopTimerOutcome, ApplicationError> {
        self.handle(actor, control_id, description, StopReason::Stop)
            .await
    }

    pub async fn pause(
        &self,
        actor: &Actor,
        control_id: &str,
        description: Option<&str>,
    ) -> Result<StopTimerOutcome, ApplicationError> {
        self.handle(actor, control_id, description, StopReason::Pause)
            .await
    }

    pub async fn handle(
        &self,
        actor: &Actor,
        control_id: &str,
        description: Option<&str>,
        reason: StopReason,
    ) -> Result<StopTimerOutcome, ApplicationError> {
        let loaded = self.streams.load(control_id).await?;
        let record = loaded.require_record()?;
        self.authorizer
            .authorize(
                actor,
                Permission::new(record.subject_kind.module(), Action::Update),
                &record.user_id,
            )
            .await?;
        let description = optional_session_description(description)?;
        let total_before = record.total_time_minutes;

        let command = StopTimer {
            control_id: control_id.to_string(),
            stopped_by: actor.user_id.clone(),
            description: description.clone(),
            reason,
            stopped_at: self.clock.now_millis(),
        };
        let decision = decide_stop(&loaded.state, command);
        let state = self.streams.commit(control_id, loaded, decision).await?;
        let record = require_record(&state)?;
        let duration_minutes = record.total_time_minutes - total_before;
        info!(
            control_id,
            user_id = %actor.user_id,
            ?reason,
            duration_minutes,
            total_minutes = record.total_time_minutes,
            "timer stopped"
        );
        Ok(StopTimerOutcome {
            control_record: ControlRecordView::from(record),
            duration_minutes,
            total_minutes: record.total_time_minutes,
            description,
        })
    }
}

// Load, fold and commit for control record streams.
//
// A commit appends with the version observed at load time, so two commands
// racing on one record cannot both succeed; the loser gets VersionMismatch.
// Intents go to the outbox and events to the read models right after.

use crate::modules::time_tracking::adapters::outbound::intent_outbox::dispatch_intents;
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::application::projector::Projector;
use crate::modules::time_tracking::core::decision::{DecideError, Decision};
use crate::modules::time_tracking::core::events::TimeTrackingEvent;
use crate::modules::time_tracking::core::evolve::evolve;
use crate::modules::time_tracking::core::state::{ControlRecord, ControlState};
use crate::modules::time_tracking::core::subject::SubjectKind;
use crate::shared::infrastructure::event_store::{EventStore, EventStoreError};
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::{info, warn};

pub fn stream_id(control_id: &str) -> String {
    format!("ControlRecord-{control_id}")
}

#[derive(Debug, Clone)]
pub struct LoadedControl {
    pub state: ControlState,
    pub version: i64,
}

impl LoadedControl {
    pub fn require_record(&self) -> Result<&ControlRecord, ApplicationError> {
        require_record(&self.state)
    }

    /// Like `require_record`, but a record of another subject kind is reported
    /// as missing. Used by routes scoped to cases or todos.
    pub fn require_subject(
        &self,
        expected: Option<SubjectKind>,
    ) -> Result<&ControlRecord, ApplicationError> {
        let record = self.require_record()?;
        match expected {
            Some(kind) if kind != record.subject_kind => {
                Err(ApplicationError::Domain(DecideError::NotFound))
            }
            _ => Ok(record),
        }
    }
}

pub fn require_record(state: &ControlState) -> Result<&ControlRecord, ApplicationError> {
    state
        .record()
        .ok_or(ApplicationError::Domain(DecideError::NotFound))
}

pub struct ControlStreams<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeTrackingEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    topic: String,
    event_store: Arc<TEventStore>,
    outbox: Arc<TOutbox>,
    projector: Arc<Projector>,
}

impl<TEventStore, TOutbox> ControlStreams<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeTrackingEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        topic: impl Into<String>,
        event_store: Arc<TEventStore>,
        outbox: Arc<TOutbox>,
        projector: Arc<Projector>,
    ) -> Self {
        Self {
            topic: topic.into(),
            event_store,
            outbox,
            projector,
        }
    }

    pub async fn load(&self, control_id: &str) -> Result<LoadedControl, ApplicationError> {
        let stream = self.event_store.load(&stream_id(control_id)).await?;
        let state = stream.events.into_iter().fold(ControlState::None, evolve);
        Ok(LoadedControl {
            state,
            version: stream.version,
        })
    }

    /// Persists an accepted decision and returns the resulting state.
    /// An accepted decision without events returns the loaded state untouched.
    pub async fn commit(
        &self,
        control_id: &str,
        loaded: LoadedControl,
        decision: Decision,
    ) -> Result<ControlState, ApplicationError> {
        let stream_id = stream_id(control_id);
        let (events, intents) = match decision {
            Decision::Accepted { events, intents } => (events, intents),
            Decision::Rejected { reason } => {
                warn!(%stream_id, %reason, "command rejected");
                return Err(ApplicationError::Domain(reason));
            }
        };
        if events.is_empty() {
            return Ok(loaded.state);
        }

        if let Err(error) = self
            .event_store
            .append(&stream_id, loaded.version, &events)
            .await
        {
            if let EventStoreError::VersionMismatch { expected, actual } = &error {
                warn!(%stream_id, expected, actual, "concurrent write lost the race");
            }
            return Err(error.into());
        }
        dispatch_intents(
            &*self.outbox,
            &stream_id,
            loaded.version,
            &self.topic,
            intents,
        )
        .await?;
        self.projector
            .apply_committed(&stream_id, loaded.version, &events)
            .await
            .map_err(|e| ApplicationError::Unexpected(e.to_string()))?;

        let version = loaded.version + events.len() as i64;
        info!(%stream_id, version, events = events.len(), "control stream committed");
        Ok(events.into_iter().fold(loaded.state, evolve))
    }
}

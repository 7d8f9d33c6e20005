use crate::modules::access_control::authorizer::Authorizer;
use crate::modules::access_control::core::scope::{Action, Actor, Permission};
use crate::modules::time_tracking::application::control_streams::ControlStreams;
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::events::TimeTrackingEvent;
use crate::modules::time_tracking::core::subject::SubjectKind;
use crate::modules::time_tracking::use_cases::list_manual_time_entries::projection::ManualTimeEntryView;
use crate::modules::time_tracking::use_cases::list_manual_time_entries::queries_port::ManualTimeEntryQueries;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct ListManualTimeEntriesHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeTrackingEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    streams: Arc<ControlStreams<TEventStore, TOutbox>>,
    queries: Arc<dyn ManualTimeEntryQueries>,
    authorizer: Arc<Authorizer>,
}

impl<TEventStore, TOutbox> ListManualTimeEntriesHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeTrackingEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        streams: Arc<ControlStreams<TEventStore, TOutbox>>,
        queries: Arc<dyn ManualTimeEntryQueries>,
        authorizer: Arc<Authorizer>,
    ) -> Self {
        Self {
            streams,
            queries,
            authorizer,
        }
    }

    /// The owning record is loaded first so scope applies to its user.
    pub async fn handle(
        &self,
        actor: &Actor,
        control_id: &str,
        expected_kind: Option<SubjectKind>,
    ) -> Result<Vec<ManualTimeEntryView>, ApplicationError> {
        let loaded = self.streams.load(control_id).await?;
        let record = loaded.require_subject(expected_kind)?;
        self.authorizer
            .authorize(
                actor,
                Permission::new(record.subject_kind.module(), Action::Read),
                &record.user_id,
            )
            .await?;
        self.queries
            .list_by_control_id(control_id)
            .await
            .map_err(|e| ApplicationError::Unexpected(e.to_string()))
    }
}

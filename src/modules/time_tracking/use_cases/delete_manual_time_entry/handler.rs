use crate::modules::access_control::authorizer::Authorizer;
use crate::modules::access_control::core::scope::{Action, Actor, Permission};
use crate::modules::time_tracking::application::control_streams::ControlStreams;
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::events::TimeTrackingEvent;
use crate::modules::time_tracking::use_cases::delete_manual_time_entry::command::DeleteManualTimeEntry;
use crate::modules::time_tracking::use_cases::delete_manual_time_entry::decide::decide_delete_manual;
use crate::modules::time_tracking::use_cases::list_manual_time_entries::queries_port::ManualTimeEntryQueries;
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::info;

pub struct DeleteManualTimeEntryHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeTrackingEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    streams: Arc<ControlStreams<TEventStore, TOutbox>>,
    queries: Arc<dyn ManualTimeEntryQueries>,
    authorizer: Arc<Authorizer>,
    clock: Arc<dyn Clock>,
}

impl<TEventStore, TOutbox> DeleteManualTimeEntryHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeTrackingEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(
        streams: Arc<ControlStreams<TEventStore, TOutbox>>,
        queries: Arc<dyn ManualTimeEntryQueries>,
        authorizer: Arc<Authorizer>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            streams,
            queries,
            authorizer,
            clock,
        }
    }

    /// Returns whether an entry was removed. Unknown ids yield `false`.
    pub async fn handle(&self, actor: &Actor, entry_id: &str) -> Result<bool, ApplicationError> {
        let Some(located) = self
            .queries
            .find_by_id(entry_id)
            .await
            .map_err(|e| ApplicationError::Unexpected(e.to_string()))?
        else {
            return Ok(false);
        };
        let control_id = located.control_id;

        let loaded = self.streams.load(&control_id).await?;
        let record = loaded.require_record()?;
        self.authorizer
            .authorize(
                actor,
                Permission::new(record.subject_kind.module(), Action::Delete),
                &record.user_id,
            )
            .await?;
        let existed = record.manual_entries.contains_key(entry_id);

        let command = DeleteManualTimeEntry {
            control_id: control_id.clone(),
            entry_id: entry_id.to_string(),
            deleted_at: self.clock.now_millis(),
            deleted_by: actor.user_id.clone(),
        };
        let decision = decide_delete_manual(&loaded.state, command);
        self.streams.commit(&control_id, loaded, decision).await?;
        if existed {
            info!(%control_id, entry_id, "manual time entry deleted");
        }
        Ok(existed)
    }
}

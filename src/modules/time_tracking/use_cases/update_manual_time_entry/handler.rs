use crate::modules::access_control::authorizer::Authorizer;
use crate::modules::access_control::core::scope::{Action, Actor, Permission};
use crate::modules::time_tracking::application::control_streams::{
    ControlStreams, require_record,
};
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::decision::DecideError;
use crate::modules::time_tracking::core::events::TimeTrackingEvent;
use crate::modules::time_tracking::use_cases::list_manual_time_entries::projection::ManualTimeEntryView;
use crate::modules::time_tracking::use_cases::list_manual_time_entries::queries_port::ManualTimeEntryQueries;
use crate::modules::time_tracking::use_cases::update_manual_time_entry::command::{
    UpdateManualTimeEntry, UpdateManualTimeEntryInput,
};
use crate::modules::time_tracking::use_cases::update_manual_time_entry::decide::decide_update_manual;
use crate::modules::time_tracking::use_cases::update_manual_time_entry::validate::validate_patch;
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::info;

pub struct UpdateManualTimeEntryHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeTrackingEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    streams: Arc<ControlStreams<TEventStore, TOutbox>>,
    queries: Arc<dyn ManualTimeEntryQueries>,
    authorizer: Arc<Authorizer>,
    clock: Arc<dyn Clock>,
}

impl<TEventStore, TOutbox> UpdateManualTimeEntryHandler<TEventStore, TOutbox>
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

    pub async fn handle(
        &self,
        actor: &Actor,
        entry_id: &str,
        input: UpdateManualTimeEntryInput,
    ) -> Result<ManualTimeEntryView, ApplicationError> {
        let located = self
            .queries
            .find_by_id(entry_id)
            .await
            .map_err(|e| ApplicationError::Unexpected(e.to_string()))?
            .ok_or(ApplicationError::Domain(DecideError::ManualEntryNotFound))?;
        let control_id = located.control_id;

        let loaded = self.streams.load(&control_id).await?;
        let record = loaded.require_record()?;
        self.authorizer
            .authorize(
                actor,
                Permission::new(record.subject_kind.module(), Action::Update),
                &record.user_id,
            )
            .await?;
        let patch = validate_patch(&input)?;

        let command = UpdateManualTimeEntry {
            control_id: control_id.clone(),
            entry_id: entry_id.to_string(),
            patch,
            updated_at: self.clock.now_millis(),
            updated_by: actor.user_id.clone(),
        };
        let decision = decide_update_manual(&loaded.state, command);
        let state = self.streams.commit(&control_id, loaded, decision).await?;
        let record = require_record(&state)?;
        let entry = record
            .manual_entries
            .get(entry_id)
            .ok_or(ApplicationError::Domain(DecideError::ManualEntryNotFound))?;
        info!(
            %control_id,
            entry_id,
            duration_minutes = entry.duration_minutes,
            total_minutes = record.total_time_minutes,
            "manual time entry updated"
        );
        Ok(ManualTimeEntryView::from(entry))
    }
}

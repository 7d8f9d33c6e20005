use crate::modules::access_control::authorizer::Authorizer;
use crate::modules::access_control::core::scope::{Action, Actor, Permission};
use crate::modules::time_tracking::application::control_streams::{
    ControlStreams, require_record,
};
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::decision::DecideError;
use crate::modules::time_tracking::core::events::TimeTrackingEvent;
use crate::modules::time_tracking::core::subject::SubjectKind;
use crate::modules::time_tracking::use_cases::add_manual_time_entry::command::{
    AddManualTimeEntry, AddManualTimeEntryInput,
};
use crate::modules::time_tracking::use_cases::add_manual_time_entry::decide::decide_add_manual;
use crate::modules::time_tracking::use_cases::add_manual_time_entry::validate::validate_new_entry;
use crate::modules::time_tracking::use_cases::list_manual_time_entries::projection::ManualTimeEntryView;
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub struct AddManualTimeEntryHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeTrackingEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    streams: Arc<ControlStreams<TEventStore, TOutbox>>,
    authorizer: Arc<Authorizer>,
    clock: Arc<dyn Clock>,
}

impl<TEventStore, TOutbox> AddManualTimeEntryHandler<TEventStore, TOutbox>
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

    /// `expected_kind` restricts the lookup to cases or todos.
    pub async fn handle(
        &self,
        actor: &Actor,
        control_id: &str,
        expected_kind: Option<SubjectKind>,
        input: AddManualTimeEntryInput,
    ) -> Result<ManualTimeEntryView, ApplicationError> {
        let loaded = self.streams.load(control_id).await?;
        let record = loaded.require_subject(expected_kind)?;
        self.authorizer
            .authorize(
                actor,
                Permission::new(record.subject_kind.module(), Action::Create),
                &record.user_id,
            )
            .await?;
        let valid = validate_new_entry(&input)?;

        let entry_id = Uuid::now_v7().to_string();
        let command = AddManualTimeEntry {
            control_id: control_id.to_string(),
            entry_id: entry_id.clone(),
            user_id: valid.user_id,
            date: valid.date,
            duration_minutes: valid.duration_minutes,
            description: valid.description,
            created_at: self.clock.now_millis(),
            created_by: actor.user_id.clone(),
        };
        let decision = decide_add_manual(&loaded.state, command);
        let state = self.streams.commit(control_id, loaded, decision).await?;
        let record = require_record(&state)?;
        let entry = record
            .manual_entries
            .get(&entry_id)
            .ok_or(ApplicationError::Domain(DecideError::ManualEntryNotFound))?;
        info!(
            control_id,
            entry_id = %entry.entry_id,
            duration_minutes = entry.duration_minutes,
            total_minutes = record.total_time_minutes,
            "manual time entry added"
        );
        Ok(ManualTimeEntryView::from(entry))
    }
}

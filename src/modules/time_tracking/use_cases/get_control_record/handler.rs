use crate::modules::access_control::authorizer::Authorizer;
use crate::modules::access_control::core::scope::{Action, Actor, Permission};
use crate::modules::time_tracking::application::control_streams::ControlStreams;
use crate::modules::time_tracking::application::errors::ApplicationError;
use crate::modules::time_tracking::core::events::TimeTrackingEvent;
use crate::modules::time_tracking::use_cases::get_control_record::view::ControlRecordView;
use crate::shared::infrastructure::event_store::EventStore;
use crate::shared::infrastructure::intent_outbox::DomainOutbox;
use std::sync::Arc;

pub struct GetControlRecordHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeTrackingEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    streams: Arc<ControlStreams<TEventStore, TOutbox>>,
    authorizer: Arc<Authorizer>,
}

impl<TEventStore, TOutbox> GetControlRecordHandler<TEventStore, TOutbox>
where
    TEventStore: EventStore<TimeTrackingEvent> + Send + Sync + 'static,
    TOutbox: DomainOutbox + Send + Sync + 'static,
{
    pub fn new(streams: Arc<ControlStreams<TEventStore, TOutbox>>, authorizer: Arc<Authorizer>) -> Self {
        Self {
            streams,
            authorizer,
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
                Permission::new(record.subject_kind.module(), Action::Read),
                &record.user_id,
            )
            .await?;
        Ok(ControlRecordView::from(record))
    }
}

use axum::response::Response;
use serde::Serialize;
use std::sync::Arc;
use tracing::error;

use crate::modules::access_control::adapters::outbound::directory::AccessDirectory;
use crate::modules::access_control::authorizer::Authorizer;
use crate::modules::time_tracking::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::time_tracking::application::control_streams::ControlStreams;
use crate::modules::time_tracking::application::errors::{ApplicationError, ErrorKind};
use crate::modules::time_tracking::application::projector::Projector;
use crate::modules::time_tracking::core::events::TimeTrackingEvent;
use crate::modules::time_tracking::use_cases::add_manual_time_entry::handler::AddManualTimeEntryHandler;
use crate::modules::time_tracking::use_cases::assign_control_record::handler::AssignControlRecordHandler;
use crate::modules::time_tracking::use_cases::change_status::handler::ChangeStatusHandler;
use crate::modules::time_tracking::use_cases::delete_manual_time_entry::handler::DeleteManualTimeEntryHandler;
use crate::modules::time_tracking::use_cases::get_active_time::handler::GetActiveTimeHandler;
use crate::modules::time_tracking::use_cases::get_control_record::handler::GetControlRecordHandler;
use crate::modules::time_tracking::use_cases::list_manual_time_entries::handler::ListManualTimeEntriesHandler;
use crate::modules::time_tracking::use_cases::list_time_entries::handler::ListTimeEntriesHandler;
use crate::modules::time_tracking::use_cases::start_timer::handler::StartTimerHandler;
use crate::modules::time_tracking::use_cases::stop_timer::handler::StopTimerHandler;
use crate::modules::time_tracking::use_cases::update_manual_time_entry::handler::UpdateManualTimeEntryHandler;
use crate::shared::core::primitives::Clock;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use crate::shared::infrastructure::intent_outbox::in_memory::InMemoryDomainOutbox;
use crate::shell::response;

pub type AppEventStore = InMemoryEventStore<TimeTrackingEvent>;
pub type AppOutbox = InMemoryDomainOutbox;

pub const PROJECTOR_NAME: &str = "time_tracking_read_models";

#[derive(Clone)]
pub struct AppState {
    pub expose_internal_errors: bool,
    pub assign_control_record: Arc<AssignControlRecordHandler<AppEventStore, AppOutbox>>,
    pub change_status: Arc<ChangeStatusHandler<AppEventStore, AppOutbox>>,
    pub get_control_record: Arc<GetControlRecordHandler<AppEventStore, AppOutbox>>,
    pub get_active_time: Arc<GetActiveTimeHandler<AppEventStore, AppOutbox>>,
    pub start_timer: Arc<StartTimerHandler<AppEventStore, AppOutbox>>,
    pub stop_timer: Arc<StopTimerHandler<AppEventStore, AppOutbox>>,
    pub add_manual_time_entry: Arc<AddManualTimeEntryHandler<AppEventStore, AppOutbox>>,
    pub update_manual_time_entry: Arc<UpdateManualTimeEntryHandler<AppEventStore, AppOutbox>>,
    pub delete_manual_time_entry: Arc<DeleteManualTimeEntryHandler<AppEventStore, AppOutbox>>,
    pub list_manual_time_entries: Arc<ListManualTimeEntriesHandler<AppEventStore, AppOutbox>>,
    pub list_time_entries: Arc<ListTimeEntriesHandler<AppEventStore, AppOutbox>>,
}

impl AppState {
    /// Wires the handlers over one set of adapters.
    pub fn new(
        event_store: Arc<AppEventStore>,
        outbox: Arc<AppOutbox>,
        projections: Arc<InMemoryProjections>,
        directory: Arc<dyn AccessDirectory>,
        clock: Arc<dyn Clock>,
        outbox_topic: &str,
        expose_internal_errors: bool,
    ) -> Self {
        let projector = Arc::new(Projector::new(
            PROJECTOR_NAME,
            projections.clone(),
            projections.clone(),
        ));
        let streams = Arc::new(ControlStreams::new(
            outbox_topic,
            event_store,
            outbox,
            projector,
        ));
        let authorizer = Arc::new(Authorizer::new(directory));

        Self {
            expose_internal_errors,
            assign_control_record: Arc::new(AssignControlRecordHandler::new(
                streams.clone(),
                authorizer.clone(),
                clock.clone(),
            )),
            change_status: Arc::new(ChangeStatusHandler::new(
                streams.clone(),
                authorizer.clone(),
                clock.clone(),
            )),
            get_control_record: Arc::new(GetControlRecordHandler::new(
                streams.clone(),
                authorizer.clone(),
            )),
            get_active_time: Arc::new(GetActiveTimeHandler::new(
                streams.clone(),
                authorizer.clone(),
                clock.clone(),
            )),
            start_timer: Arc::new(StartTimerHandler::new(
                streams.clone(),
                authorizer.clone(),
                clock.clone(),
            )),
            stop_timer: Arc::new(StopTimerHandler::new(
                streams.clone(),
                authorizer.clone(),
                clock.clone(),
            )),
            add_manual_time_entry: Arc::new(AddManualTimeEntryHandler::new(
                streams.clone(),
                authorizer.clone(),
                clock.clone(),
            )),
            update_manual_time_entry: Arc::new(UpdateManualTimeEntryHandler::new(
                streams.clone(),
                projections.clone(),
                authorizer.clone(),
                clock.clone(),
            )),
            delete_manual_time_entry: Arc::new(DeleteManualTimeEntryHandler::new(
                streams.clone(),
                projections.clone(),
                authorizer.clone(),
                clock,
            )),
            list_manual_time_entries: Arc::new(ListManualTimeEntriesHandler::new(
                streams.clone(),
                projections.clone(),
                authorizer.clone(),
            )),
            list_time_entries: Arc::new(ListTimeEntriesHandler::new(
                streams,
                projections,
                authorizer,
            )),
        }
    }

    /// 200 with the value, or the error envelope.
    pub fn respond<T: Serialize>(&self, result: Result<T, ApplicationError>) -> Response {
        match result {
            Ok(data) => response::ok(data),
            Err(error) => self.fail(&error),
        }
    }

    pub fn fail(&self, failure: &ApplicationError) -> Response {
        if failure.kind() == ErrorKind::Internal {
            error!(error = %failure, "request failed");
        }
        response::failure(failure, self.expose_internal_errors)
    }
}

use crate::modules::time_tracking::core::decision::{DecideError, Decision};
use crate::modules::time_tracking::core::events::TimeTrackingEvent;
use crate::modules::time_tracking::core::events::v1::manual_time_entry_added::ManualTimeEntryAddedV1;
use crate::modules::time_tracking::core::intents::TimeTrackingIntent;
use crate::modules::time_tracking::core::state::ControlState;
use crate::modules::time_tracking::use_cases::add_manual_time_entry::command::AddManualTimeEntry;

pub fn decide_add_manual(state: &ControlState, command: AddManualTimeEntry) -> Decision {
    let Some(record) = state.record() else {
        return Decision::rejected(DecideError::NotFound);
    };
    if record.manual_entries.contains_key(&command.entry_id) {
        return Decision::rejected(DecideError::AlreadyExists);
    }
    let added = ManualTimeEntryAddedV1 {
        control_id: command.control_id,
        entry_id: command.entry_id,
        user_id: command.user_id,
        date: command.date,
        duration_minutes: command.duration_minutes,
        description: command.description,
        created_at: command.created_at,
        created_by: command.created_by,
    };
    Decision::Accepted {
        events: vec![TimeTrackingEvent::ManualTimeEntryAddedV1(added.clone())],
        intents: vec![TimeTrackingIntent::PublishManualTimeEntryAdded { payload: added }],
    }
}

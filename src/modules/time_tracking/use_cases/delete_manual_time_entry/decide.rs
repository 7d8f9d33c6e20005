use crate::modules::time_tracking::core::decision::{DecideError, Decision};
use crate::modules::time_tracking::core::events::TimeTrackingEvent;
use crate::modules::time_tracking::core::events::v1::manual_time_entry_deleted::ManualTimeEntryDeletedV1;
use crate::modules::time_tracking::core::intents::TimeTrackingIntent;
use crate::modules::time_tracking::core::state::ControlState;
use crate::modules::time_tracking::use_cases::delete_manual_time_entry::command::DeleteManualTimeEntry;

/// Deleting an entry that is already gone is a no-op.
pub fn decide_delete_manual(state: &ControlState, command: DeleteManualTimeEntry) -> Decision {
    let Some(record) = state.record() else {
        return Decision::rejected(DecideError::NotFound);
    };
    let Some(entry) = record.manual_entries.get(&command.entry_id) else {
        return Decision::unchanged();
    };

    let deleted = ManualTimeEntryDeletedV1 {
        control_id: command.control_id,
        entry_id: command.entry_id,
        duration_minutes: entry.duration_minutes,
        deleted_at: command.deleted_at,
        deleted_by: command.deleted_by,
    };
    Decision::Accepted {
        events: vec![TimeTrackingEvent::ManualTimeEntryDeletedV1(deleted.clone())],
        intents: vec![TimeTrackingIntent::PublishManualTimeEntryDeleted { payload: deleted }],
    }
}

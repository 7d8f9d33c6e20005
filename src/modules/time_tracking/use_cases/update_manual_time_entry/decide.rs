use crate::modules::time_tracking::core::decision::{DecideError, Decision};
use crate::modules::time_tracking::core::events::TimeTrackingEvent;
use crate::modules::time_tracking::core::events::v1::manual_time_entry_updated::ManualTimeEntryUpdatedV1;
use crate::modules::time_tracking::core::intents::TimeTrackingIntent;
use crate::modules::time_tracking::core::state::ControlState;
use crate::modules::time_tracking::use_cases::update_manual_time_entry::command::UpdateManualTimeEntry;

/// Merges the patch over the current entry. The event carries the previous
/// duration so the total moves by the difference.
pub fn decide_update_manual(state: &ControlState, command: UpdateManualTimeEntry) -> Decision {
    let Some(record) = state.record() else {
        return Decision::rejected(DecideError::NotFound);
    };
    let Some(entry) = record.manual_entries.get(&command.entry_id) else {
        return Decision::rejected(DecideError::ManualEntryNotFound);
    };
    if command.patch.is_empty() {
        return Decision::unchanged();
    }

    let patch = command.patch;
    let updated = ManualTimeEntryUpdatedV1 {
        control_id: command.control_id,
        entry_id: command.entry_id,
        date: patch.date.unwrap_or(entry.date),
        duration_minutes: patch.duration_minutes.unwrap_or(entry.duration_minutes),
        previous_duration_minutes: entry.duration_minutes,
        description: patch
            .description
            .unwrap_or_else(|| entry.description.clone()),
        updated_at: command.updated_at,
        updated_by: command.updated_by,
    };
    Decision::Accepted {
        events: vec![TimeTrackingEvent::ManualTimeEntryUpdatedV1(updated.clone())],
        intents: vec![TimeTrackingIntent::PublishManualTimeEntryUpdated { payload: updated }],
    }
}

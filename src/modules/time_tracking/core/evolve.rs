// Deterministic transitions: prior state + event -> next state.
//
// Events that do not apply to the current state leave it unchanged.

use crate::modules::time_tracking::core::events::TimeTrackingEvent;
use crate::modules::time_tracking::core::state::{
    ControlRecord, ControlState, ManualTimeEntry, TimerState,
};
use std::collections::BTreeMap;

pub fn evolve(state: ControlState, event: TimeTrackingEvent) -> ControlState {
    match (state, event) {
        (ControlState::None, TimeTrackingEvent::ControlRecordAssignedV1(e)) => {
            ControlState::Tracked(ControlRecord {
                control_id: e.control_id,
                subject_kind: e.subject_kind,
                subject_id: e.subject_id,
                user_id: e.user_id,
                status_id: e.status_id,
                total_time_minutes: 0,
                timer: TimerState::Idle,
                started_at: None,
                completed_at: None,
                manual_entries: BTreeMap::new(),
                created_at: e.assigned_at,
                updated_at: e.assigned_at,
            })
        }
        (ControlState::Tracked(mut record), TimeTrackingEvent::ControlStatusChangedV1(e)) => {
            record.status_id = e.status_id;
            record.completed_at = e.completed_at;
            record.updated_at = e.changed_at;
            ControlState::Tracked(record)
        }
        (ControlState::Tracked(mut record), TimeTrackingEvent::TimerStartedV1(e)) => {
            record.started_at.get_or_insert(e.started_at);
            record.timer = TimerState::Running {
                started_at: e.started_at,
                time_entry_id: e.time_entry_id,
                started_by: e.user_id,
            };
            record.updated_at = e.started_at;
            ControlState::Tracked(record)
        }
        (ControlState::Tracked(mut record), TimeTrackingEvent::TimerStoppedV1(e)) => {
            record.timer = TimerState::Idle;
            record.total_time_minutes = record.total_time_minutes.saturating_add(e.duration_minutes);
            record.updated_at = e.stopped_at;
            ControlState::Tracked(record)
        }
        (ControlState::Tracked(mut record), TimeTrackingEvent::ManualTimeEntryAddedV1(e)) => {
            record.total_time_minutes = record.total_time_minutes.saturating_add(e.duration_minutes);
            record.updated_at = e.created_at;
            record.manual_entries.insert(
                e.entry_id.clone(),
                ManualTimeEntry {
                    entry_id: e.entry_id,
                    control_id: e.control_id,
                    user_id: e.user_id,
                    date: e.date,
                    duration_minutes: e.duration_minutes,
                    description: e.description,
                    created_at: e.created_at,
                    created_by: e.created_by.clone(),
                    updated_at: e.created_at,
                    updated_by: e.created_by,
                },
            );
            ControlState::Tracked(record)
        }
        (ControlState::Tracked(mut record), TimeTrackingEvent::ManualTimeEntryUpdatedV1(e)) => {
            if let Some(entry) = record.manual_entries.get_mut(&e.entry_id) {
                entry.date = e.date;
                entry.duration_minutes = e.duration_minutes;
                entry.description = e.description;
                entry.updated_at = e.updated_at;
                entry.updated_by = e.updated_by;
                record.total_time_minutes = record
                    .total_time_minutes
                    .saturating_add(e.duration_minutes)
                    .saturating_sub(e.previous_duration_minutes)
                    .max(0);
                record.updated_at = e.updated_at;
            }
            ControlState::Tracked(record)
        }
        (ControlState::Tracked(mut record), TimeTrackingEvent::ManualTimeEntryDeletedV1(e)) => {
            if record.manual_entries.remove(&e.entry_id).is_some() {
                record.total_time_minutes =
                    record.total_time_minutes.saturating_sub(e.duration_minutes).max(0);
                record.updated_at = e.deleted_at;
            }
            ControlState::Tracked(record)
        }
        (state, _) => state,
    }
}

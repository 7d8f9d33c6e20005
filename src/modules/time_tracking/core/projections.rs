// Translate a domain event into read model mutations.
//
// - Timer sessions become time entry rows: inserted open on start, closed on stop.
// - Manual entries are upserted, revised in place, or removed.
// - last_event_id is "stream_id:version" so repositories can apply idempotently.

use crate::modules::time_tracking::core::events::TimeTrackingEvent;
use crate::modules::time_tracking::use_cases::list_manual_time_entries::projection::ManualTimeEntryRow;
use crate::modules::time_tracking::use_cases::list_time_entries::projection::TimeEntryRow;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeEntryClosure {
    pub time_entry_id: String,
    pub end_time: i64,
    pub duration_minutes: i64,
    pub description: Option<String>,
    pub last_event_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualEntryRevision {
    pub entry_id: String,
    pub date: NaiveDate,
    pub duration_minutes: i64,
    pub description: String,
    pub updated_at: i64,
    pub updated_by: String,
    pub last_event_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    UpsertTimeEntry(TimeEntryRow),
    CloseTimeEntry(TimeEntryClosure),
    UpsertManualEntry(ManualTimeEntryRow),
    ReviseManualEntry(ManualEntryRevision),
    RemoveManualEntry { entry_id: String },
}

pub fn apply(stream_id: &str, version: i64, event: &TimeTrackingEvent) -> Vec<Mutation> {
    let stream_key = format!("{stream_id}:{version}");
    match event {
        TimeTrackingEvent::ControlRecordAssignedV1(_)
        | TimeTrackingEvent::ControlStatusChangedV1(_) => vec![],
        TimeTrackingEvent::TimerStartedV1(e) => vec![Mutation::UpsertTimeEntry(TimeEntryRow {
            time_entry_id: e.time_entry_id.clone(),
            control_id: e.control_id.clone(),
            user_id: e.user_id.clone(),
            start_time: e.started_at,
            end_time: None,
            duration_minutes: 0,
            description: None,
            last_event_id: Some(stream_key),
        })],
        TimeTrackingEvent::TimerStoppedV1(e) => vec![Mutation::CloseTimeEntry(TimeEntryClosure {
            time_entry_id: e.time_entry_id.clone(),
            end_time: e.stopped_at,
            duration_minutes: e.duration_minutes,
            description: e.description.clone(),
            last_event_id: stream_key,
        })],
        TimeTrackingEvent::ManualTimeEntryAddedV1(e) => {
            vec![Mutation::UpsertManualEntry(ManualTimeEntryRow {
                entry_id: e.entry_id.clone(),
                control_id: e.control_id.clone(),
                user_id: e.user_id.clone(),
                date: e.date,
                duration_minutes: e.duration_minutes,
                description: e.description.clone(),
                created_at: e.created_at,
                created_by: e.created_by.clone(),
                updated_at: e.created_at,
                updated_by: e.created_by.clone(),
                last_event_id: Some(stream_key),
            })]
        }
        TimeTrackingEvent::ManualTimeEntryUpdatedV1(e) => {
            vec![Mutation::ReviseManualEntry(ManualEntryRevision {
                entry_id: e.entry_id.clone(),
                date: e.date,
                duration_minutes: e.duration_minutes,
                description: e.description.clone(),
                updated_at: e.updated_at,
                updated_by: e.updated_by.clone(),
                last_event_id: stream_key,
            })]
        }
        TimeTrackingEvent::ManualTimeEntryDeletedV1(e) => vec![Mutation::RemoveManualEntry {
            entry_id: e.entry_id.clone(),
        }],
    }
}

// Canonical events for the fixed control record `ctl-fixed-0001`.

use crate::modules::time_tracking::core::events::v1::control_record_assigned::ControlRecordAssignedV1;
use crate::modules::time_tracking::core::events::v1::manual_time_entry_added::ManualTimeEntryAddedV1;
use crate::modules::time_tracking::core::events::v1::timer_started::TimerStartedV1;
use crate::modules::time_tracking::core::events::v1::timer_stopped::{StopReason, TimerStoppedV1};
use crate::tests::fixtures::commands::add_manual_time_entry::AddManualTimeEntryBuilder;
use crate::tests::fixtures::commands::assign_control_record::AssignControlRecordBuilder;

pub fn make_assigned_event() -> ControlRecordAssignedV1 {
    let command = AssignControlRecordBuilder::new().build();
    ControlRecordAssignedV1 {
        control_id: command.control_id,
        subject_kind: command.subject_kind,
        subject_id: command.subject_id,
        user_id: command.user_id,
        status_id: command.status_id,
        assigned_at: command.assigned_at,
        assigned_by: command.assigned_by,
    }
}

pub fn make_timer_started_event(started_at: i64) -> TimerStartedV1 {
    TimerStartedV1 {
        control_id: "ctl-fixed-0001".into(),
        time_entry_id: "te-fixed-0001".into(),
        user_id: "user-fixed-0001".into(),
        started_at,
    }
}

pub fn make_timer_stopped_event(
    started_at: i64,
    stopped_at: i64,
    duration_minutes: i64,
) -> TimerStoppedV1 {
    TimerStoppedV1 {
        control_id: "ctl-fixed-0001".into(),
        time_entry_id: "te-fixed-0001".into(),
        session_started_at: started_at,
        stopped_at,
        stopped_by: "user-fixed-0001".into(),
        duration_minutes,
        description: None,
        reason: StopReason::Stop,
    }
}

pub fn make_manual_entry_added_event(entry_id: &str, duration_minutes: i64) -> ManualTimeEntryAddedV1 {
    let command = AddManualTimeEntryBuilder::new()
        .entry_id(entry_id)
        .duration_minutes(duration_minutes)
        .build();
    ManualTimeEntryAddedV1 {
        control_id: command.control_id,
        entry_id: command.entry_id,
        user_id: command.user_id,
        date: command.date,
        duration_minutes: command.duration_minutes,
        description: command.description,
        created_at: command.created_at,
        created_by: command.created_by,
    }
}

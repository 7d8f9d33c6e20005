// Root event enumeration for control record streams.
//
// Versioning
// - Prefer additive changes. A breaking change gets a new versioned payload and a new variant.
// - Historical events keep their meaning.

pub mod v1 {
    pub mod control_record_assigned;
    pub mod control_status_changed;
    pub mod manual_time_entry_added;
    pub mod manual_time_entry_deleted;
    pub mod manual_time_entry_updated;
    pub mod timer_started;
    pub mod timer_stopped;
}

use crate::shared::core::primitives::Millis;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum TimeTrackingEvent {
    ControlRecordAssignedV1(v1::control_record_assigned::ControlRecordAssignedV1),
    ControlStatusChangedV1(v1::control_status_changed::ControlStatusChangedV1),
    TimerStartedV1(v1::timer_started::TimerStartedV1),
    TimerStoppedV1(v1::timer_stopped::TimerStoppedV1),
    ManualTimeEntryAddedV1(v1::manual_time_entry_added::ManualTimeEntryAddedV1),
    ManualTimeEntryUpdatedV1(v1::manual_time_entry_updated::ManualTimeEntryUpdatedV1),
    ManualTimeEntryDeletedV1(v1::manual_time_entry_deleted::ManualTimeEntryDeletedV1),
}

impl TimeTrackingEvent {
    pub fn occurred_at(&self) -> Millis {
        match self {
            TimeTrackingEvent::ControlRecordAssignedV1(e) => e.assigned_at,
            TimeTrackingEvent::ControlStatusChangedV1(e) => e.changed_at,
            TimeTrackingEvent::TimerStartedV1(e) => e.started_at,
            TimeTrackingEvent::TimerStoppedV1(e) => e.stopped_at,
            TimeTrackingEvent::ManualTimeEntryAddedV1(e) => e.created_at,
            TimeTrackingEvent::ManualTimeEntryUpdatedV1(e) => e.updated_at,
            TimeTrackingEvent::ManualTimeEntryDeletedV1(e) => e.deleted_at,
        }
    }
}

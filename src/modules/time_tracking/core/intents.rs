use crate::modules::time_tracking::core::events::v1::manual_time_entry_added::ManualTimeEntryAddedV1;
use crate::modules::time_tracking::core::events::v1::manual_time_entry_deleted::ManualTimeEntryDeletedV1;
use crate::modules::time_tracking::core::events::v1::manual_time_entry_updated::ManualTimeEntryUpdatedV1;
use crate::modules::time_tracking::core::events::v1::timer_stopped::TimerStoppedV1;

/// Integration messages produced alongside events whenever accounted time
/// changes. The outbound intent_outbox adapter turns these into OutboxRows.
/// A decision emits at most one intent, matching its single event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeTrackingIntent {
    PublishTimerStopped { payload: TimerStoppedV1 },
    PublishManualTimeEntryAdded { payload: ManualTimeEntryAddedV1 },
    PublishManualTimeEntryUpdated { payload: ManualTimeEntryUpdatedV1 },
    PublishManualTimeEntryDeleted { payload: ManualTimeEntryDeletedV1 },
}

// A timer session closed and its rounded duration was added to the total.
//
// `reason` records whether the caller asked to stop or to pause. Both close the
// session the same way.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopReason {
    Stop,
    Pause,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimerStoppedV1 {
    pub control_id: String,
    pub time_entry_id: String,
    pub session_started_at: i64,
    pub stopped_at: i64,
    pub stopped_by: String,
    pub duration_minutes: i64,
    pub description: Option<String>,
    pub reason: StopReason,
}

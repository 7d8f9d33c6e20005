// A timer session opened. `time_entry_id` names the automatic time entry that
// stays open until the matching TimerStoppedV1.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct TimerStartedV1 {
    pub control_id: String,
    pub time_entry_id: String,
    pub user_id: String,
    pub started_at: i64,
}

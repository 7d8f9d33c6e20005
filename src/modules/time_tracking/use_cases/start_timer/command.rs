use crate::shared::core::primitives::Millis;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTimer {
    pub control_id: String,
    /// Id of the automatic time entry the session opens.
    pub time_entry_id: String,
    pub user_id: String,
    pub started_at: Millis,
}

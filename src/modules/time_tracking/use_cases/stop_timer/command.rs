use crate::modules::time_tracking::core::events::v1::timer_stopped::StopReason;
use crate::shared::core::primitives::Millis;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopTimer {
    pub control_id: String,
    pub stopped_by: String,
    /// Already trimmed and length-checked.
    pub description: Option<String>,
    pub reason: StopReason,
    pub stopped_at: Millis,
}

use crate::modules::time_tracking::core::state::ControlRecord;
use crate::shared::core::primitives::Millis;
use serde::Serialize;

/// Live timer snapshot. Nothing is persisted when it is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveTimeView {
    pub is_timer_active: bool,
    pub timer_start_at: Option<Millis>,
    pub total_time_minutes: i64,
    pub current_session_minutes: i64,
}

impl ActiveTimeView {
    pub fn at(record: &ControlRecord, now: Millis) -> Self {
        Self {
            is_timer_active: record.is_timer_active(),
            timer_start_at: record.timer_start_at(),
            total_time_minutes: record.total_time_minutes,
            current_session_minutes: record.current_session_minutes(now),
        }
    }
}

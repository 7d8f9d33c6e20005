use crate::modules::time_tracking::core::state::ControlRecord;
use crate::modules::time_tracking::core::subject::SubjectKind;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlRecordView {
    pub id: String,
    pub subject_kind: SubjectKind,
    pub subject_id: String,
    pub user_id: String,
    pub status_id: String,
    pub total_time_minutes: i64,
    pub is_timer_active: bool,
    pub timer_start_at: Option<i64>,
    pub started_at: Option<i64>,
    pub completed_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<&ControlRecord> for ControlRecordView {
    fn from(record: &ControlRecord) -> Self {
        Self {
            id: record.control_id.clone(),
            subject_kind: record.subject_kind,
            subject_id: record.subject_id.clone(),
            user_id: record.user_id.clone(),
            status_id: record.status_id.clone(),
            total_time_minutes: record.total_time_minutes,
            is_timer_active: record.is_timer_active(),
            timer_start_at: record.timer_start_at(),
            started_at: record.started_at,
            completed_at: record.completed_at,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

// A subject (case or todo) was assigned to a user, opening a control record
// with zeroed time counters and an idle timer.

use crate::modules::time_tracking::core::subject::SubjectKind;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ControlRecordAssignedV1 {
    pub control_id: String,
    pub subject_kind: SubjectKind,
    pub subject_id: String,
    pub user_id: String,
    pub status_id: String,
    pub assigned_at: i64,
    pub assigned_by: String,
}

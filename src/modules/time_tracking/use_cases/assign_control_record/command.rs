use crate::modules::time_tracking::core::subject::SubjectKind;
use crate::shared::core::primitives::Millis;

/// Caller-supplied fields, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignControlRecordInput {
    pub subject_kind: SubjectKind,
    pub subject_id: Option<String>,
    pub user_id: Option<String>,
    pub status_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignControlRecord {
    pub control_id: String,
    pub subject_kind: SubjectKind,
    pub subject_id: String,
    pub user_id: String,
    pub status_id: String,
    pub assigned_at: Millis,
    pub assigned_by: String,
}

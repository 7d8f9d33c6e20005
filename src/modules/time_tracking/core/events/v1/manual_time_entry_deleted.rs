#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ManualTimeEntryDeletedV1 {
    pub control_id: String,
    pub entry_id: String,
    pub duration_minutes: i64,
    pub deleted_at: i64,
    pub deleted_by: String,
}

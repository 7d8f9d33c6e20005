use chrono::NaiveDate;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ManualTimeEntryAddedV1 {
    pub control_id: String,
    pub entry_id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub duration_minutes: i64,
    pub description: String,
    pub created_at: i64,
    pub created_by: String,
}

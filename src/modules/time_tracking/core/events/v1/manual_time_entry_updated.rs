// Carries the full corrected values plus the previous duration, so the running
// total can be reconciled by the difference.

use chrono::NaiveDate;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ManualTimeEntryUpdatedV1 {
    pub control_id: String,
    pub entry_id: String,
    pub date: NaiveDate,
    pub duration_minutes: i64,
    pub previous_duration_minutes: i64,
    pub description: String,
    pub updated_at: i64,
    pub updated_by: String,
}

use crate::modules::time_tracking::core::state::ManualTimeEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManualTimeEntryRow {
    pub entry_id: String,
    pub control_id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub duration_minutes: i64,
    pub description: String,
    pub created_at: i64,
    pub created_by: String,
    pub updated_at: i64,
    pub updated_by: String,
    pub last_event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManualTimeEntryView {
    pub id: String,
    pub control_id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub duration_minutes: i64,
    pub description: String,
    pub created_at: i64,
    pub created_by: String,
    pub updated_at: i64,
}

impl From<ManualTimeEntryRow> for ManualTimeEntryView {
    fn from(row: ManualTimeEntryRow) -> Self {
        Self {
            id: row.entry_id,
            control_id: row.control_id,
            user_id: row.user_id,
            date: row.date,
            duration_minutes: row.duration_minutes,
            description: row.description,
            created_at: row.created_at,
            created_by: row.created_by,
            updated_at: row.updated_at,
        }
    }
}

impl From<&ManualTimeEntry> for ManualTimeEntryView {
    fn from(entry: &ManualTimeEntry) -> Self {
        Self {
            id: entry.entry_id.clone(),
            control_id: entry.control_id.clone(),
            user_id: entry.user_id.clone(),
            date: entry.date,
            duration_minutes: entry.duration_minutes,
            description: entry.description.clone(),
            created_at: entry.created_at,
            created_by: entry.created_by.clone(),
            updated_at: entry.updated_at,
        }
    }
}

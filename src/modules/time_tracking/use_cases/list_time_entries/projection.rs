use serde::{Deserialize, Serialize};

/// Read model row for one automatic timer session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntryRow {
    pub time_entry_id: String,
    pub control_id: String,
    pub user_id: String,
    pub start_time: i64,
    /// `None` while the session is open.
    pub end_time: Option<i64>,
    pub duration_minutes: i64,
    pub description: Option<String>,
    pub last_event_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryView {
    pub id: String,
    pub control_id: String,
    pub user_id: String,
    pub start_time: i64,
    pub end_time: Option<i64>,
    pub duration_minutes: i64,
    pub description: Option<String>,
}

impl From<TimeEntryRow> for TimeEntryView {
    fn from(row: TimeEntryRow) -> Self {
        Self {
            id: row.time_entry_id,
            control_id: row.control_id,
            user_id: row.user_id,
            start_time: row.start_time,
            end_time: row.end_time,
            duration_minutes: row.duration_minutes,
            description: row.description,
        }
    }
}

use crate::shared::core::primitives::Millis;
use chrono::NaiveDate;
use serde_json::Value;

/// Raw fields as received. `duration_minutes` stays a JSON value because
/// clients send it both as a number and as a numeric string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddManualTimeEntryInput {
    pub description: Option<String>,
    pub duration_minutes: Option<Value>,
    pub date: Option<String>,
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddManualTimeEntry {
    pub control_id: String,
    pub entry_id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub duration_minutes: i64,
    pub description: String,
    pub created_at: Millis,
    pub created_by: String,
}

use crate::shared::core::primitives::Millis;
use chrono::NaiveDate;
use serde_json::Value;

/// Any subset of the fields; absent ones stay unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateManualTimeEntryInput {
    pub description: Option<String>,
    pub duration_minutes: Option<Value>,
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManualEntryPatch {
    pub description: Option<String>,
    pub duration_minutes: Option<i64>,
    pub date: Option<NaiveDate>,
}

impl ManualEntryPatch {
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.duration_minutes.is_none() && self.date.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateManualTimeEntry {
    pub control_id: String,
    pub entry_id: String,
    pub patch: ManualEntryPatch,
    pub updated_at: Millis,
    pub updated_by: String,
}

use crate::modules::time_tracking::use_cases::add_manual_time_entry::command::AddManualTimeEntry;
use chrono::NaiveDate;

pub struct AddManualTimeEntryBuilder {
    inner: AddManualTimeEntry,
}

impl Default for AddManualTimeEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AddManualTimeEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: AddManualTimeEntry {
                control_id: "ctl-fixed-0001".into(),
                entry_id: "me-fixed-0001".into(),
                user_id: "user-fixed-0001".into(),
                date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                duration_minutes: 15,
                description: "x".repeat(100),
                created_at: 1_700_000_000_000,
                created_by: "user-fixed-0001".into(),
            },
        }
    }

    pub fn entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.entry_id = v.into();
        self
    }

    pub fn duration_minutes(mut self, v: i64) -> Self {
        self.inner.duration_minutes = v;
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> AddManualTimeEntry {
        self.inner
    }
}

use crate::modules::time_tracking::use_cases::list_time_entries::projection::TimeEntryView;
use async_trait::async_trait;

#[async_trait]
pub trait TimeEntryQueries: Send + Sync {
    /// Automatic sessions of one control record, newest start first.
    async fn list_by_control_id(&self, control_id: &str) -> anyhow::Result<Vec<TimeEntryView>>;
}

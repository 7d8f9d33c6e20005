use crate::modules::time_tracking::use_cases::list_manual_time_entries::projection::ManualTimeEntryView;
use async_trait::async_trait;

#[async_trait]
pub trait ManualTimeEntryQueries: Send + Sync {
    /// Ordered by date, then creation time, both descending.
    async fn list_by_control_id(
        &self,
        control_id: &str,
    ) -> anyhow::Result<Vec<ManualTimeEntryView>>;

    async fn find_by_id(&self, entry_id: &str) -> anyhow::Result<Option<ManualTimeEntryView>>;
}

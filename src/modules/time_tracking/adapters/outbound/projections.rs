use crate::modules::time_tracking::core::projections::{ManualEntryRevision, TimeEntryClosure};
use crate::modules::time_tracking::use_cases::list_manual_time_entries::projection::ManualTimeEntryRow;
use crate::modules::time_tracking::use_cases::list_time_entries::projection::TimeEntryRow;
use async_trait::async_trait;

#[async_trait]
pub trait TimeTrackingProjectionRepository: Send + Sync {
    async fn upsert_time_entry(&self, row: TimeEntryRow) -> anyhow::Result<()>;
    async fn close_time_entry(&self, closure: TimeEntryClosure) -> anyhow::Result<()>;
    async fn upsert_manual_entry(&self, row: ManualTimeEntryRow) -> anyhow::Result<()>;
    async fn revise_manual_entry(&self, revision: ManualEntryRevision) -> anyhow::Result<()>;
    async fn remove_manual_entry(&self, entry_id: &str) -> anyhow::Result<()>;
}

#[async_trait]
pub trait WatermarkRepository: Send + Sync {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()>;
}

use crate::modules::time_tracking::adapters::outbound::projections::{
    TimeTrackingProjectionRepository, WatermarkRepository,
};
use crate::modules::time_tracking::core::projections::{ManualEntryRevision, TimeEntryClosure};
use crate::modules::time_tracking::use_cases::list_manual_time_entries::projection::{
    ManualTimeEntryRow, ManualTimeEntryView,
};
use crate::modules::time_tracking::use_cases::list_manual_time_entries::queries_port::ManualTimeEntryQueries;
use crate::modules::time_tracking::use_cases::list_time_entries::projection::{
    TimeEntryRow, TimeEntryView,
};
use crate::modules::time_tracking::use_cases::list_time_entries::queries_port::TimeEntryQueries;
use async_trait::async_trait;
use std::cmp::Reverse;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjections {
    time_entries: RwLock<HashMap<String, TimeEntryRow>>,
    manual_entries: RwLock<HashMap<String, ManualTimeEntryRow>>,
    watermarks: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            anyhow::bail!("Projections offline");
        }
        Ok(())
    }
}

#[async_trait]
impl TimeTrackingProjectionRepository for InMemoryProjections {
    async fn upsert_time_entry(&self, row: TimeEntryRow) -> anyhow::Result<()> {
        self.ensure_online()?;
        self.time_entries
            .write()
            .await
            .insert(row.time_entry_id.clone(), row);
        Ok(())
    }

    async fn close_time_entry(&self, closure: TimeEntryClosure) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut time_entries = self.time_entries.write().await;
        let row = time_entries
            .get_mut(&closure.time_entry_id)
            .ok_or_else(|| anyhow::anyhow!("time entry {} not projected", closure.time_entry_id))?;
        row.end_time = Some(closure.end_time);
        row.duration_minutes = closure.duration_minutes;
        row.description = closure.description;
        row.last_event_id = Some(closure.last_event_id);
        Ok(())
    }

    async fn upsert_manual_entry(&self, row: ManualTimeEntryRow) -> anyhow::Result<()> {
        self.ensure_online()?;
        self.manual_entries
            .write()
            .await
            .insert(row.entry_id.clone(), row);
        Ok(())
    }

    async fn revise_manual_entry(&self, revision: ManualEntryRevision) -> anyhow::Result<()> {
        self.ensure_online()?;
        let mut manual_entries = self.manual_entries.write().await;
        let row = manual_entries
            .get_mut(&revision.entry_id)
            .ok_or_else(|| anyhow::anyhow!("manual entry {} not projected", revision.entry_id))?;
        row.date = revision.date;
        row.duration_minutes = revision.duration_minutes;
        row.description = revision.description;
        row.updated_at = revision.updated_at;
        row.updated_by = revision.updated_by;
        row.last_event_id = Some(revision.last_event_id);
        Ok(())
    }

    async fn remove_manual_entry(&self, entry_id: &str) -> anyhow::Result<()> {
        self.ensure_online()?;
        self.manual_entries.write().await.remove(entry_id);
        Ok(())
    }
}

#[async_trait]
impl WatermarkRepository for InMemoryProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        self.ensure_online()?;
        Ok(self.watermarks.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        self.ensure_online()?;
        self.watermarks
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait]
impl TimeEntryQueries for InMemoryProjections {
    async fn list_by_control_id(&self, control_id: &str) -> anyhow::Result<Vec<TimeEntryView>> {
        self.ensure_online()?;
        let mut rows: Vec<TimeEntryRow> = self
            .time_entries
            .read()
            .await
            .values()
            .filter(|row| row.control_id == control_id)
            .cloned()
            .collect();
        rows.sort_by_key(|row| Reverse(row.start_time));
        Ok(rows.into_iter().map(TimeEntryView::from).collect())
    }
}

#[async_trait]
impl ManualTimeEntryQueries for InMemoryProjections {
    async fn list_by_control_id(
        &self,
        control_id: &str,
    ) -> anyhow::Result<Vec<ManualTimeEntryView>> {
        self.ensure_online()?;
        let mut rows: Vec<ManualTimeEntryRow> = self
            .manual_entries
            .read()
            .await
            .values()
            .filter(|row| row.control_id == control_id)
            .cloned()
            .collect();
        rows.sort_by_key(|row| Reverse((row.date, row.created_at)));
        Ok(rows.into_iter().map(ManualTimeEntryView::from).collect())
    }

    async fn find_by_id(&self, entry_id: &str) -> anyhow::Result<Option<ManualTimeEntryView>> {
        self.ensure_online()?;
        Ok(self
            .manual_entries
            .read()
            .await
            .get(entry_id)
            .cloned()
            .map(ManualTimeEntryView::from))
    }
}

use crate::modules::time_tracking::adapters::outbound::projections::{
    TimeTrackingProjectionRepository, WatermarkRepository,
};
use crate::modules::time_tracking::core::events::TimeTrackingEvent;
use crate::modules::time_tracking::core::projections::{Mutation, apply};
use anyhow::Context;
use std::sync::Arc;
use tracing::debug;

/// Applies committed events to the read models. Each stream has its own
/// watermark holding the last applied version; versions at or below it are
/// skipped, so replaying a stream is harmless.
pub struct Projector {
    name: String,
    repository: Arc<dyn TimeTrackingProjectionRepository>,
    watermarks: Arc<dyn WatermarkRepository>,
}

impl Projector {
    pub fn new(
        name: impl Into<String>,
        repository: Arc<dyn TimeTrackingProjectionRepository>,
        watermarks: Arc<dyn WatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            repository,
            watermarks,
        }
    }

    fn watermark_key(&self, stream_id: &str) -> String {
        format!("{}/{stream_id}", self.name)
    }

    /// Last version of `stream_id` reflected in the read models; 0 if none.
    pub async fn applied_version(&self, stream_id: &str) -> anyhow::Result<i64> {
        let Some(raw) = self.watermarks.get(&self.watermark_key(stream_id)).await? else {
            return Ok(0);
        };
        raw.parse()
            .with_context(|| format!("corrupt watermark `{raw}` for {stream_id}"))
    }

    pub async fn apply_one(
        &self,
        stream_id: &str,
        version: i64,
        event: &TimeTrackingEvent,
    ) -> anyhow::Result<()> {
        if version <= self.applied_version(stream_id).await? {
            debug!(stream_id, version, "event already projected");
            return Ok(());
        }
        for mutation in apply(stream_id, version, event) {
            match mutation {
                Mutation::UpsertTimeEntry(row) => self.repository.upsert_time_entry(row).await?,
                Mutation::CloseTimeEntry(closure) => {
                    self.repository.close_time_entry(closure).await?
                }
                Mutation::UpsertManualEntry(row) => {
                    self.repository.upsert_manual_entry(row).await?
                }
                Mutation::ReviseManualEntry(revision) => {
                    self.repository.revise_manual_entry(revision).await?
                }
                Mutation::RemoveManualEntry { entry_id } => {
                    self.repository.remove_manual_entry(&entry_id).await?
                }
            }
        }
        self.watermarks
            .set(&self.watermark_key(stream_id), &version.to_string())
            .await
    }

    /// Applies `events` appended right after `base_version`.
    pub async fn apply_committed(
        &self,
        stream_id: &str,
        base_version: i64,
        events: &[TimeTrackingEvent],
    ) -> anyhow::Result<()> {
        for (i, event) in events.iter().enumerate() {
            self.apply_one(stream_id, base_version + i as i64 + 1, event)
                .await?;
        }
        Ok(())
    }
}

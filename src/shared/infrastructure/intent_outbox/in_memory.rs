use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use std::collections::HashSet;
use tokio::sync::Mutex;

#[derive(Default)]
struct Ledger {
    rows: Vec<OutboxRow>,
    keys: HashSet<(String, i64)>,
}

/// Outbox kept in process memory. Rows are never drained; a relay would read
/// them in insertion order.
#[derive(Default)]
pub struct InMemoryDomainOutbox {
    ledger: Mutex<Ledger>,
}

impl InMemoryDomainOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every enqueued row, oldest first.
    pub async fn rows(&self) -> Vec<OutboxRow> {
        self.ledger.lock().await.rows.clone()
    }

    pub async fn event_types(&self) -> Vec<String> {
        self.ledger
            .lock()
            .await
            .rows
            .iter()
            .map(|row| row.event_type.clone())
            .collect()
    }

    pub async fn rows_for_stream(&self, stream_id: &str) -> Vec<OutboxRow> {
        self.ledger
            .lock()
            .await
            .rows
            .iter()
            .filter(|row| row.stream_id == stream_id)
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl DomainOutbox for InMemoryDomainOutbox {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError> {
        if row.topic.trim().is_empty() {
            return Err(OutboxError::Validation("topic must not be empty".into()));
        }
        let mut ledger = self.ledger.lock().await;
        if !ledger.keys.insert(row.key()) {
            return Err(OutboxError::Duplicate {
                stream_id: row.stream_id,
                stream_version: row.stream_version,
            });
        }
        ledger.rows.push(row);
        Ok(())
    }
}

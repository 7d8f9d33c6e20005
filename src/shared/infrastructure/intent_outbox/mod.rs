use async_trait::async_trait;
use serde_json::Value as Json;
use thiserror::Error;

/// One integration message waiting for a relay. `(stream_id, stream_version)`
/// identifies the commit that produced it; a commit yields at most one row.
#[derive(Debug, Clone)]
pub struct OutboxRow {
    pub topic: String,
    pub event_type: String,
    pub event_version: i32,
    pub stream_id: String,
    pub stream_version: i64,
    /// Epoch millis of the fact, not of the enqueue.
    pub occurred_at: i64,
    pub payload: Json,
}

impl OutboxRow {
    pub fn key(&self) -> (String, i64) {
        (self.stream_id.clone(), self.stream_version)
    }
}

#[derive(Debug, Error)]
pub enum OutboxError {
    #[error("duplicate outbox row for stream {stream_id} v{stream_version}")]
    Duplicate {
        stream_id: String,
        stream_version: i64,
    },

    #[error("invalid outbox row: {0}")]
    Validation(String),
}

#[async_trait]
pub trait DomainOutbox: Send + Sync {
    async fn enqueue(&self, row: OutboxRow) -> Result<(), OutboxError>;
}

pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionMismatch { expected: i64, actual: i64 },

    #[error("backend error: {0}")]
    Backend(String),
}

impl EventStoreError {
    /// True when a concurrent writer got to the stream first.
    pub fn is_conflict(&self) -> bool {
        matches!(self, EventStoreError::VersionMismatch { .. })
    }
}

/// A stream as read back: its events in append order and the version an
/// `append` must present to extend it. A stream nobody wrote is version 0.
#[derive(Debug, Clone)]
pub struct LoadedStream<E> {
    pub events: Vec<E>,
    pub version: i64,
}

impl<E> LoadedStream<E> {
    pub fn from_events(events: Vec<E>) -> Self {
        let version = events.len() as i64;
        Self { events, version }
    }
}

/// Append-only stream storage with optimistic concurrency.
///
/// `append` must fail with [`EventStoreError::VersionMismatch`] when the stream
/// length differs from `expected_version`; callers rely on that check to
/// serialize read-modify-write cycles per stream.
#[async_trait]
pub trait EventStore<Event: Clone + Send + Sync + 'static>: Send + Sync {
    async fn load(&self, stream_id: &str) -> Result<LoadedStream<Event>, EventStoreError>;
    async fn append(
        &self,
        stream_id: &str,
        expected_version: i64,
        new_events: &[Event],
    ) -> Result<(), EventStoreError>;
}

pub mod in_memory;

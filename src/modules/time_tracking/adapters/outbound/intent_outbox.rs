use crate::modules::time_tracking::core::intents::TimeTrackingIntent;
use crate::shared::infrastructure::intent_outbox::{DomainOutbox, OutboxError, OutboxRow};
use serde::Serialize;

/// Translate a list of domain intents into outbox rows and enqueue them.
/// `starting_version` is the event store stream version before the append.
/// Each intent corresponds to one new version: starting_version + index + 1.
pub async fn dispatch_intents(
    outbox: &impl DomainOutbox,
    stream_id: &str,
    starting_version: i64,
    topic: &str,
    intents: Vec<TimeTrackingIntent>,
) -> Result<(), OutboxError> {
    for (i, intent) in intents.into_iter().enumerate() {
        let stream_version = starting_version + i as i64 + 1;
        let row = match intent {
            TimeTrackingIntent::PublishTimerStopped { payload } => {
                let occurred_at = payload.stopped_at;
                build_row(topic, "TimerStopped", stream_id, stream_version, occurred_at, &payload)?
            }
            TimeTrackingIntent::PublishManualTimeEntryAdded { payload } => {
                let occurred_at = payload.created_at;
                build_row(
                    topic,
                    "ManualTimeEntryAdded",
                    stream_id,
                    stream_version,
                    occurred_at,
                    &payload,
                )?
            }
            TimeTrackingIntent::PublishManualTimeEntryUpdated { payload } => {
                let occurred_at = payload.updated_at;
                build_row(
                    topic,
                    "ManualTimeEntryUpdated",
                    stream_id,
                    stream_version,
                    occurred_at,
                    &payload,
                )?
            }
            TimeTrackingIntent::PublishManualTimeEntryDeleted { payload } => {
                let occurred_at = payload.deleted_at;
                build_row(
                    topic,
                    "ManualTimeEntryDeleted",
                    stream_id,
                    stream_version,
                    occurred_at,
                    &payload,
                )?
            }
        };
        outbox.enqueue(row).await?;
    }
    Ok(())
}

fn build_row(
    topic: &str,
    event_type: &str,
    stream_id: &str,
    stream_version: i64,
    occurred_at: i64,
    payload: &impl Serialize,
) -> Result<OutboxRow, OutboxError> {
    let payload =
        serde_json::to_value(payload).map_err(|e| OutboxError::Validation(e.to_string()))?;
    Ok(OutboxRow {
        topic: topic.to_string(),
        event_type: event_type.to_string(),
        event_version: 1,
        stream_id: stream_id.to_string(),
        stream_version,
        occurred_at,
        payload,
    })
}

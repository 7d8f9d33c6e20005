use crate::modules::time_tracking::core::events::TimeTrackingEvent;
use crate::modules::time_tracking::core::intents::TimeTrackingIntent;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DecideError {
    #[error("control record not found")]
    NotFound,

    #[error("control record already exists")]
    AlreadyExists,

    #[error("timer already active")]
    TimerAlreadyActive,

    #[error("timer not active")]
    TimerNotActive,

    #[error("manual time entry not found")]
    ManualEntryNotFound,
}

/// Outcome of a pure decider. An accepted decision with no events is a no-op.
#[derive(Debug)]
pub enum Decision {
    Accepted {
        events: Vec<TimeTrackingEvent>,
        intents: Vec<TimeTrackingIntent>,
    },
    Rejected {
        reason: DecideError,
    },
}

impl Decision {
    pub fn unchanged() -> Self {
        Decision::Accepted {
            events: Vec::new(),
            intents: Vec::new(),
        }
    }

    pub fn rejected(reason: DecideError) -> Self {
        Decision::Rejected { reason }
    }
}

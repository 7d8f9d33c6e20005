use crate::modules::time_tracking::core::decision::{DecideError, Decision};
use crate::modules::time_tracking::core::events::TimeTrackingEvent;
use crate::modules::time_tracking::core::events::v1::timer_stopped::TimerStoppedV1;
use crate::modules::time_tracking::core::intents::TimeTrackingIntent;
use crate::modules::time_tracking::core::state::{ControlState, TimerState};
use crate::modules::time_tracking::use_cases::stop_timer::command::StopTimer;
use crate::shared::core::primitives::elapsed_minutes;

/// Closes the running session. The entry closed is always the one the
/// running timer points at, whoever stops it.
pub fn decide_stop(state: &ControlState, command: StopTimer) -> Decision {
    let Some(record) = state.record() else {
        return Decision::rejected(DecideError::NotFound);
    };
    let TimerState::Running {
        started_at,
        time_entry_id,
        ..
    } = &record.timer
    else {
        return Decision::rejected(DecideError::TimerNotActive);
    };

    let stopped = TimerStoppedV1 {
        control_id: command.control_id,
        time_entry_id: time_entry_id.clone(),
        session_started_at: *started_at,
        stopped_at: command.stopped_at,
        stopped_by: command.stopped_by,
        duration_minutes: elapsed_minutes(*started_at, command.stopped_at),
        description: command.description,
        reason: command.reason,
    };
    Decision::Accepted {
        events: vec![TimeTrackingEvent::TimerStoppedV1(stopped.clone())],
        intents: vec![TimeTrackingIntent::PublishTimerStopped { payload: stopped }],
    }
}

use crate::modules::time_tracking::core::decision::{DecideError, Decision};
use crate::modules::time_tracking::core::events::TimeTrackingEvent;
use crate::modules::time_tracking::core::events::v1::timer_started::TimerStartedV1;
use crate::modules::time_tracking::core::state::ControlState;
use crate::modules::time_tracking::use_cases::start_timer::command::StartTimer;

pub fn decide_start(state: &ControlState, command: StartTimer) -> Decision {
    let Some(record) = state.record() else {
        return Decision::rejected(DecideError::NotFound);
    };
    if record.is_timer_active() {
        return Decision::rejected(DecideError::TimerAlreadyActive);
    }
    Decision::Accepted {
        events: vec![TimeTrackingEvent::TimerStartedV1(TimerStartedV1 {
            control_id: command.control_id,
            time_entry_id: command.time_entry_id,
            user_id: command.user_id,
            started_at: command.started_at,
        })],
        intents: vec![],
    }
}

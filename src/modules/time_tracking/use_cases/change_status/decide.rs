use crate::modules::time_tracking::core::decision::{DecideError, Decision};
use crate::modules::time_tracking::core::events::TimeTrackingEvent;
use crate::modules::time_tracking::core::events::v1::control_status_changed::ControlStatusChangedV1;
use crate::modules::time_tracking::core::state::ControlState;
use crate::modules::time_tracking::use_cases::change_status::command::ChangeStatus;

/// Workflow transition. A completed record keeps its first completion time;
/// reopening clears it. The timer is never touched.
pub fn decide_change_status(state: &ControlState, command: ChangeStatus) -> Decision {
    let Some(record) = state.record() else {
        return Decision::rejected(DecideError::NotFound);
    };
    let completed_at = if command.completed {
        record.completed_at.or(Some(command.changed_at))
    } else {
        None
    };
    if record.status_id == command.status_id && record.completed_at == completed_at {
        return Decision::unchanged();
    }
    Decision::Accepted {
        events: vec![TimeTrackingEvent::ControlStatusChangedV1(
            ControlStatusChangedV1 {
                control_id: command.control_id,
                status_id: command.status_id,
                completed_at,
                changed_at: command.changed_at,
                changed_by: command.changed_by,
            },
        )],
        intents: vec![],
    }
}

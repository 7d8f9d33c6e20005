use crate::modules::time_tracking::core::decision::{DecideError, Decision};
use crate::modules::time_tracking::core::events::TimeTrackingEvent;
use crate::modules::time_tracking::core::events::v1::control_record_assigned::ControlRecordAssignedV1;
use crate::modules::time_tracking::core::state::ControlState;
use crate::modules::time_tracking::use_cases::assign_control_record::command::AssignControlRecord;

pub fn decide_assign(state: &ControlState, command: AssignControlRecord) -> Decision {
    if state.record().is_some() {
        return Decision::rejected(DecideError::AlreadyExists);
    }
    Decision::Accepted {
        events: vec![TimeTrackingEvent::ControlRecordAssignedV1(
            ControlRecordAssignedV1 {
                control_id: command.control_id,
                subject_kind: command.subject_kind,
                subject_id: command.subject_id,
                user_id: command.user_id,
                status_id: command.status_id,
                assigned_at: command.assigned_at,
                assigned_by: command.assigned_by,
            },
        )],
        intents: vec![],
    }
}

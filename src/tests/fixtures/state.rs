use crate::modules::time_tracking::core::state::{ControlRecord, TimerState};
use crate::modules::time_tracking::core::subject::SubjectKind;
use std::collections::BTreeMap;

pub fn make_idle_record() -> ControlRecord {
    ControlRecord {
        control_id: "ctl-fixed-0001".into(),
        subject_kind: SubjectKind::Todo,
        subject_id: "todo-fixed-0001".into(),
        user_id: "user-fixed-0001".into(),
        status_id: "open".into(),
        total_time_minutes: 0,
        timer: TimerState::Idle,
        started_at: None,
        completed_at: None,
        manual_entries: BTreeMap::new(),
        created_at: 1_700_000_000_000,
        updated_at: 1_700_000_000_000,
    }
}

pub fn make_running_record(started_at: i64) -> ControlRecord {
    ControlRecord {
        timer: TimerState::Running {
            started_at,
            time_entry_id: "te-fixed-0001".into(),
            started_by: "user-fixed-0001".into(),
        },
        started_at: Some(started_at),
        updated_at: started_at,
        ..make_idle_record()
    }
}

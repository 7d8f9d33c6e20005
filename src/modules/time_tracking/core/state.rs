// Domain state of a control record after folding its stream.
//
// Boundaries
// - No input or output. Framework-free.
//
// The timer is an explicit enum: `is_timer_active` and `timer_start_at` are
// derived from it, and the id of the single open time entry lives inside
// `Running`.

use crate::modules::time_tracking::core::subject::SubjectKind;
use crate::shared::core::primitives::{Millis, elapsed_minutes};
use chrono::NaiveDate;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlState {
    None,
    Tracked(ControlRecord),
}

impl ControlState {
    pub fn record(&self) -> Option<&ControlRecord> {
        match self {
            ControlState::None => None,
            ControlState::Tracked(record) => Some(record),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running {
        started_at: Millis,
        time_entry_id: String,
        started_by: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlRecord {
    pub control_id: String,
    pub subject_kind: SubjectKind,
    pub subject_id: String,
    pub user_id: String,
    pub status_id: String,
    pub total_time_minutes: i64,
    pub timer: TimerState,
    /// First-ever timer start. Set once.
    pub started_at: Option<Millis>,
    pub completed_at: Option<Millis>,
    pub manual_entries: BTreeMap<String, ManualTimeEntry>,
    pub created_at: Millis,
    pub updated_at: Millis,
}

impl ControlRecord {
    pub fn is_timer_active(&self) -> bool {
        matches!(self.timer, TimerState::Running { .. })
    }

    pub fn timer_start_at(&self) -> Option<Millis> {
        match &self.timer {
            TimerState::Running { started_at, .. } => Some(*started_at),
            TimerState::Idle => None,
        }
    }

    /// Rounded minutes of the running session at `now`; zero when idle.
    pub fn current_session_minutes(&self, now: Millis) -> i64 {
        self.timer_start_at()
            .map(|started_at| elapsed_minutes(started_at, now))
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualTimeEntry {
    pub entry_id: String,
    pub control_id: String,
    pub user_id: String,
    pub date: NaiveDate,
    pub duration_minutes: i64,
    pub description: String,
    pub created_at: Millis,
    pub created_by: String,
    pub updated_at: Millis,
    pub updated_by: String,
}

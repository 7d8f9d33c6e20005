use crate::modules::time_tracking::use_cases::get_control_record::view::ControlRecordView;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StopTimerOutcome {
    #[serde(rename = "caseControl")]
    pub control_record: ControlRecordView,
    /// Rounded length of the session just closed.
    pub duration_minutes: i64,
    pub total_minutes: i64,
    pub description: Option<String>,
}

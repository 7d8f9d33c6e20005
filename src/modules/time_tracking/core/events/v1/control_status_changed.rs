#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct ControlStatusChangedV1 {
    pub control_id: String,
    pub status_id: String,
    /// `None` reopens the record.
    pub completed_at: Option<i64>,
    pub changed_at: i64,
    pub changed_by: String,
}

use crate::shared::core::primitives::Millis;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeStatus {
    pub control_id: String,
    pub status_id: String,
    /// `true` marks the record completed, `false` reopens it.
    pub completed: bool,
    pub changed_at: Millis,
    pub changed_by: String,
}

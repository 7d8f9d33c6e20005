use crate::shared::core::primitives::Millis;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteManualTimeEntry {
    pub control_id: String,
    pub entry_id: String,
    pub deleted_at: Millis,
    pub deleted_by: String,
}

use crate::modules::time_tracking::core::validation::{
    ValidationErrors, Validator, entry_date, long_description, positive_minutes,
};
use crate::modules::time_tracking::use_cases::update_manual_time_entry::command::{
    ManualEntryPatch, UpdateManualTimeEntryInput,
};

/// Supplied fields follow the same rules as on creation.
pub fn validate_patch(
    input: &UpdateManualTimeEntryInput,
) -> Result<ManualEntryPatch, ValidationErrors> {
    let mut validator = Validator::new();
    let description = validator.check(
        input
            .description
            .as_deref()
            .map(|raw| long_description("description", raw))
            .transpose(),
    );
    let duration_minutes = validator.check(
        input
            .duration_minutes
            .as_ref()
            .map(|raw| positive_minutes("durationMinutes", raw))
            .transpose(),
    );
    let date = validator.check(
        input
            .date
            .as_deref()
            .map(|raw| entry_date("date", raw))
            .transpose(),
    );

    let ((description, duration_minutes), date) =
        validator.finish(description.zip(duration_minutes).zip(date))?;
    Ok(ManualEntryPatch {
        description,
        duration_minutes,
        date,
    })
}

use crate::modules::time_tracking::core::validation::{
    ValidationErrors, Validator, entry_date, long_description, positive_minutes, required_text,
};
use crate::modules::time_tracking::use_cases::add_manual_time_entry::command::AddManualTimeEntryInput;
use chrono::NaiveDate;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidManualEntry {
    pub description: String,
    pub duration_minutes: i64,
    pub date: NaiveDate,
    pub user_id: String,
}

pub fn validate_new_entry(
    input: &AddManualTimeEntryInput,
) -> Result<ValidManualEntry, ValidationErrors> {
    let mut validator = Validator::new();
    let description = validator.check(long_description(
        "description",
        input.description.as_deref().unwrap_or_default(),
    ));
    let duration_minutes = validator.check(positive_minutes(
        "durationMinutes",
        input.duration_minutes.as_ref().unwrap_or(&Value::Null),
    ));
    let date = validator.check(entry_date("date", input.date.as_deref().unwrap_or_default()));
    let user_id = validator.check(required_text("userId", input.user_id.as_deref()));

    let (((description, duration_minutes), date), user_id) = validator.finish(
        description
            .zip(duration_minutes)
            .zip(date)
            .zip(user_id),
    )?;
    Ok(ValidManualEntry {
        description,
        duration_minutes,
        date,
        user_id,
    })
}

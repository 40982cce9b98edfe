use thiserror::Error;

use crate::models::{Schedule, Week};
use crate::time::TimeOfDay;

pub const MAX_SECONDS_OF_DAY: i32 = 86400;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("week must be between 1 and 7, got {0}")]
    WeekOutOfRange(u16),
    #[error("{field} must lie within the day, got {seconds} seconds")]
    TimeOutOfRange { field: &'static str, seconds: i32 },
}

pub fn validate_week(value: u16) -> Result<Week, ValidationError> {
    Week::from_number(value).ok_or(ValidationError::WeekOutOfRange(value))
}

pub fn validate_time(field: &'static str, time: TimeOfDay) -> Result<(), ValidationError> {
    let seconds = time.total_seconds();
    if (0..=MAX_SECONDS_OF_DAY).contains(&seconds) {
        Ok(())
    } else {
        Err(ValidationError::TimeOutOfRange { field, seconds })
    }
}

pub fn validate_schedule(schedule: &Schedule) -> Result<(), ValidationError> {
    validate_week(schedule.week)?;
    validate_time("from", schedule.from)?;
    validate_time("to", schedule.to)?;
    Ok(())
}

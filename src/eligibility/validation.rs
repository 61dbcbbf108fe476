use super::domain::CustomerProfile;

/// Longest consumption history accepted at the service boundary.
pub const MAX_HISTORY_MONTHS: usize = 12;

/// Malformed input detected before evaluation. Never produced for a merely ineligible profile.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileValidationError {
    #[error("consumption history must contain at least one reading")]
    EmptyHistory,
    #[error("consumption reading at position {index} is not a finite number")]
    NonFiniteReading { index: usize },
    #[error("consumption reading at position {index} is negative ({value})")]
    NegativeReading { index: usize, value: f64 },
    #[error("consumption history has {len} readings, at most {max} are accepted")]
    HistoryTooLong { len: usize, max: usize },
    #[error("total consumption overflows at position {index}")]
    TotalOutOfRange { index: usize },
}

pub(crate) fn validate_profile(profile: &CustomerProfile) -> Result<(), ProfileValidationError> {
    let history = &profile.consumption_history;
    if history.is_empty() {
        return Err(ProfileValidationError::EmptyHistory);
    }
    if history.len() > MAX_HISTORY_MONTHS {
        return Err(ProfileValidationError::HistoryTooLong {
            len: history.len(),
            max: MAX_HISTORY_MONTHS,
        });
    }

    let mut total = 0.0_f64;
    for (index, value) in history.iter().copied().enumerate() {
        if !value.is_finite() {
            return Err(ProfileValidationError::NonFiniteReading { index });
        }
        if value < 0.0 {
            return Err(ProfileValidationError::NegativeReading { index, value });
        }
        total += value;
        if !total.is_finite() {
            return Err(ProfileValidationError::TotalOutOfRange { index });
        }
    }

    Ok(())
}

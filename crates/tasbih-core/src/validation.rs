//! Target validation pipeline
//!
//! A proposed target goes through five stages, each short-circuiting with
//! its own [`ValidationError`]:
//!
//! 1. empty input
//! 2. not a whole number
//! 3. not positive
//! 4. above [`MAX_COUNT`]
//! 5. not above the current count
//!
//! The pipeline is pure. Presenting the error is left to the caller.

use thiserror::Error;

use crate::types::MAX_COUNT;

/// Why a proposed target was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("target input is empty")]
    EmptyInput,

    #[error("target is not a whole number")]
    NotInteger,

    #[error("target must be greater than 0")]
    NonPositive,

    #[error("target cannot exceed {}", MAX_COUNT)]
    ExceedsMax,

    #[error("target must be greater than the current count ({current})")]
    NotGreaterThanCurrent { current: u32 },
}

impl ValidationError {
    /// Alert title shown to the user
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::EmptyInput => "Empty Target",
            _ => "Invalid Target",
        }
    }

    /// Actionable message shown to the user
    pub fn message(&self) -> String {
        match self {
            ValidationError::EmptyInput => "Please enter a target count first".to_string(),
            ValidationError::NotInteger => "Please enter a valid whole number".to_string(),
            ValidationError::NonPositive => "Target count must be greater than 0".to_string(),
            ValidationError::ExceedsMax => {
                format!("Target count cannot exceed {}", MAX_COUNT)
            }
            ValidationError::NotGreaterThanCurrent { current } => {
                format!(
                    "Target count must be greater than current count ({})",
                    current
                )
            }
        }
    }
}

/// Validate a raw target string against the current count.
///
/// Returns the parsed target on success.
pub fn validate_target(input: &str, current_count: u32) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::EmptyInput);
    }

    let value = parse_whole_number(trimmed)?;

    if value <= 0 {
        return Err(ValidationError::NonPositive);
    }

    if value > i64::from(MAX_COUNT) {
        return Err(ValidationError::ExceedsMax);
    }

    // In range [1, MAX_COUNT] so the conversion cannot fail
    let value = value as u32;

    if value <= current_count {
        return Err(ValidationError::NotGreaterThanCurrent {
            current: current_count,
        });
    }

    Ok(value)
}

/// Parse an optionally signed run of ASCII digits.
///
/// Magnitudes that overflow `i64` saturate so later stages still classify
/// them as non-positive or too large rather than as malformed.
fn parse_whole_number(s: &str) -> Result<i64, ValidationError> {
    let (negative, digits) = match s.as_bytes()[0] {
        b'-' => (true, &s[1..]),
        b'+' => (false, &s[1..]),
        _ => (false, s),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::NotInteger);
    }

    match digits.parse::<i64>() {
        Ok(v) if negative => Ok(-v),
        Ok(v) => Ok(v),
        Err(_) if negative => Ok(i64::MIN),
        Err(_) => Ok(i64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_whitespace_input() {
        assert_eq!(validate_target("", 0), Err(ValidationError::EmptyInput));
        assert_eq!(validate_target("   \t", 0), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn test_not_integer() {
        assert_eq!(validate_target("abc", 0), Err(ValidationError::NotInteger));
        assert_eq!(validate_target("2.5", 0), Err(ValidationError::NotInteger));
        assert_eq!(validate_target("12abc", 0), Err(ValidationError::NotInteger));
        assert_eq!(validate_target("-", 0), Err(ValidationError::NotInteger));
        assert_eq!(validate_target("1 2", 0), Err(ValidationError::NotInteger));
    }

    #[test]
    fn test_non_positive() {
        assert_eq!(validate_target("0", 0), Err(ValidationError::NonPositive));
        assert_eq!(validate_target("-3", 0), Err(ValidationError::NonPositive));
        assert_eq!(
            validate_target("-99999999999999999999999", 0),
            Err(ValidationError::NonPositive)
        );
    }

    #[test]
    fn test_exceeds_max() {
        assert_eq!(validate_target("100001", 0), Err(ValidationError::ExceedsMax));
        assert_eq!(
            validate_target("99999999999999999999999", 0),
            Err(ValidationError::ExceedsMax)
        );
        assert_eq!(validate_target("100000", 0), Ok(100_000));
    }

    #[test]
    fn test_not_greater_than_current() {
        assert_eq!(
            validate_target("3", 5),
            Err(ValidationError::NotGreaterThanCurrent { current: 5 })
        );
        assert_eq!(
            validate_target("5", 5),
            Err(ValidationError::NotGreaterThanCurrent { current: 5 })
        );
    }

    #[test]
    fn test_success() {
        assert_eq!(validate_target("50", 5), Ok(50));
        assert_eq!(validate_target("  33 ", 0), Ok(33));
        assert_eq!(validate_target("+7", 0), Ok(7));
    }

    #[test]
    fn test_stage_order_range_before_current() {
        // Both too large and <= current is impossible, but non-positive wins over current
        assert_eq!(validate_target("0", 5), Err(ValidationError::NonPositive));
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(ValidationError::EmptyInput.title(), "Empty Target");
        assert_eq!(ValidationError::NotInteger.title(), "Invalid Target");
        assert_eq!(
            ValidationError::ExceedsMax.message(),
            "Target count cannot exceed 100000"
        );
        assert_eq!(
            ValidationError::NotGreaterThanCurrent { current: 7 }.message(),
            "Target count must be greater than current count (7)"
        );
    }
}

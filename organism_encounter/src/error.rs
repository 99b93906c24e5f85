//! Error types for encounter resolution.

use thiserror::Error;

use crate::diet::DietClassification;

/// All recoverable encounter failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncounterError {
    /// Neither participant can eat anything.
    #[error("invalid encounter: {first} vs {second}, at least one participant must be able to eat")]
    InvalidEncounter {
        first: DietClassification,
        second: DietClassification,
    },

    /// An additive eat branch exceeded `u64::MAX`.
    #[error("vitality overflow: {lhs} + {rhs} overflows u64")]
    VitalityOverflow { lhs: u64, rhs: u64 },

    /// A resolved outcome failed its post-resolution checks.
    #[error("invariant violation: {0}")]
    InvariantViolation(String),
}

/// Result type for encounter operations.
pub type EncounterResult<T> = Result<T, EncounterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let err = EncounterError::InvalidEncounter {
            first: DietClassification::Plant,
            second: DietClassification::Plant,
        };
        assert_eq!(
            err.to_string(),
            "invalid encounter: plant vs plant, at least one participant must be able to eat"
        );

        let err = EncounterError::VitalityOverflow { lhs: u64::MAX, rhs: 3 };
        assert_eq!(
            err.to_string(),
            format!("vitality overflow: {} + 3 overflows u64", u64::MAX)
        );

        let err = EncounterError::InvariantViolation("[INVARIANT:identity] x".into());
        assert_eq!(err.to_string(), "invariant violation: [INVARIANT:identity] x");
    }
}

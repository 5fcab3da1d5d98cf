use chrono::NaiveDate;
use thiserror::Error;

/// Domain-level error types.
///
/// Each business failure carries its own variant so callers can map
/// errors (e.g. to HTTP statuses) by kind instead of matching message
/// text.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Email, time string or date string failed its pattern check.
    #[error("{0}")]
    InvalidFormat(String),

    #[error("Start time must be before end time")]
    InvalidOrder,

    #[error("Capacity must be greater than 0")]
    InvalidCapacity(i32),

    #[error("Cannot book past dates")]
    PastDate(NaiveDate),

    /// Lifecycle method called on a booking that is not active.
    #[error("{0}")]
    InvalidStateTransition(&'static str),

    /// Aggregate of business-rule violations, in check order.
    #[error("Validation error: {}", .0.join(", "))]
    ValidationFailed(Vec<String>),

    /// Adapter-level failure surfaced through a repository port.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_failed_joins_reasons() {
        let err = DomainError::ValidationFailed(vec![
            "The space is not available for bookings".into(),
            "You have reached the limit of 3 bookings per week".into(),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation error: The space is not available for bookings, \
             You have reached the limit of 3 bookings per week"
        );
    }

    #[test]
    fn not_found_names_entity_and_id() {
        let err = DomainError::NotFound {
            entity: "Booking",
            id: "b-1".into(),
        };
        assert_eq!(err.to_string(), "Booking not found: b-1");
    }
}

//! Time slot value object

use crate::shared::types::errors::{DomainError, DomainResult};

/// Half-open `HH:MM` time range within a single day.
///
/// The original strings are kept as entered (a leading zero on the hour
/// is optional); comparisons always go through minutes-since-midnight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeSlot {
    start_time: String,
    end_time: String,
    start_minutes: u16,
    end_minutes: u16,
}

impl TimeSlot {
    /// Build a slot from two `HH:MM` strings; start must be strictly
    /// before end.
    pub fn create(start_time: &str, end_time: &str) -> DomainResult<Self> {
        let start_minutes = Self::parse_minutes(start_time)
            .ok_or_else(|| DomainError::InvalidFormat("Invalid time format. Use HH:MM".into()))?;
        let end_minutes = Self::parse_minutes(end_time)
            .ok_or_else(|| DomainError::InvalidFormat("Invalid time format. Use HH:MM".into()))?;

        if start_minutes >= end_minutes {
            return Err(DomainError::InvalidOrder);
        }

        Ok(Self {
            start_time: start_time.to_string(),
            end_time: end_time.to_string(),
            start_minutes,
            end_minutes,
        })
    }

    // 24-hour HH:MM, one or two hour digits, exactly two minute digits.
    fn parse_minutes(time: &str) -> Option<u16> {
        let (hours, minutes) = time.split_once(':')?;

        if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
            return None;
        }
        if !hours.bytes().all(|b| b.is_ascii_digit())
            || !minutes.bytes().all(|b| b.is_ascii_digit())
        {
            return None;
        }

        let h: u16 = hours.parse().ok()?;
        let m: u16 = minutes.parse().ok()?;
        if h > 23 || m > 59 {
            return None;
        }

        Some(h * 60 + m)
    }

    pub fn start_time(&self) -> &str {
        &self.start_time
    }

    pub fn end_time(&self) -> &str {
        &self.end_time
    }

    pub fn start_minutes(&self) -> u16 {
        self.start_minutes
    }

    pub fn end_minutes(&self) -> u16 {
        self.end_minutes
    }

    /// Half-open overlap: touching endpoints do not overlap.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.start_minutes < other.end_minutes && other.start_minutes < self.end_minutes
    }
}

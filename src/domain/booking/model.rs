//! Booking domain entity

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::email::Email;
use crate::domain::time_slot::TimeSlot;
use crate::shared::types::errors::{DomainError, DomainResult};

/// Booking lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    /// Upcoming or in-progress booking
    Active,
    /// Cancelled by the client or an operator
    Cancelled,
    /// Booking took place
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Cancelled => "CANCELLED",
            Self::Completed => "COMPLETED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "ACTIVE" => Some(Self::Active),
            "CANCELLED" => Some(Self::Cancelled),
            "COMPLETED" => Some(Self::Completed),
            _ => None,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Reservation of a space for a time slot on a calendar date.
///
/// Only the status field mutates in place (lifecycle); every other field
/// is immutable — edits are modeled as a new instance with the same id.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    id: Uuid,
    space_id: Uuid,
    client_email: Email,
    date: NaiveDate,
    slot: TimeSlot,
    status: BookingStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Booking {
    /// Reconstruction factory: builds the value objects (propagating their
    /// failures) but skips the not-in-past rule, so persisted historical
    /// bookings stay loadable.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        id: Uuid,
        space_id: Uuid,
        client_email: &str,
        date: NaiveDate,
        start_time: &str,
        end_time: &str,
        status: BookingStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        Ok(Self {
            id,
            space_id,
            client_email: Email::create(client_email)?,
            date,
            slot: TimeSlot::create(start_time, end_time)?,
            status,
            created_at,
            updated_at,
        })
    }

    /// Client-initiated path: as [`Booking::create`], plus the booking date
    /// must not precede today.
    pub fn create_new(
        id: Uuid,
        space_id: Uuid,
        client_email: &str,
        date: NaiveDate,
        start_time: &str,
        end_time: &str,
    ) -> DomainResult<Self> {
        let now = Utc::now();

        if date < now.date_naive() {
            return Err(DomainError::PastDate(date));
        }

        Self::create(
            id,
            space_id,
            client_email,
            date,
            start_time,
            end_time,
            BookingStatus::Active,
            now,
            now,
        )
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn space_id(&self) -> Uuid {
        self.space_id
    }

    pub fn client_email(&self) -> &Email {
        &self.client_email
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn slot(&self) -> &TimeSlot {
        &self.slot
    }

    pub fn start_time(&self) -> &str {
        self.slot.start_time()
    }

    pub fn end_time(&self) -> &str {
        self.slot.end_time()
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn is_active(&self) -> bool {
        self.status == BookingStatus::Active
    }

    /// Cancel this booking. Only active bookings can transition.
    pub fn cancel(&mut self) -> DomainResult<()> {
        if self.status != BookingStatus::Active {
            return Err(DomainError::InvalidStateTransition(
                "Only active bookings can be cancelled",
            ));
        }
        self.status = BookingStatus::Cancelled;
        Ok(())
    }

    /// Mark this booking as completed. Only active bookings can transition.
    pub fn complete(&mut self) -> DomainResult<()> {
        if self.status != BookingStatus::Active {
            return Err(DomainError::InvalidStateTransition(
                "Only active bookings can be completed",
            ));
        }
        self.status = BookingStatus::Completed;
        Ok(())
    }

    /// True when both bookings occupy the same space on the same date,
    /// both are active, and their time slots overlap.
    pub fn conflicts_with(&self, other: &Booking) -> bool {
        self.space_id == other.space_id
            && self.date == other.date
            && self.is_active()
            && other.is_active()
            && self.slot.overlaps(&other.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_booking(space_id: Uuid, d: NaiveDate, start: &str, end: &str) -> Booking {
        Booking::create(
            Uuid::new_v4(),
            space_id,
            "client@example.com",
            d,
            start,
            end,
            BookingStatus::Active,
            Utc::now(),
            Utc::now(),
        )
        .unwrap()
    }

    #[test]
    fn create_new_rejects_past_dates() {
        let yesterday = Utc::now().date_naive() - Duration::days(1);
        let err = Booking::create_new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "client@example.com",
            yesterday,
            "09:00",
            "10:00",
        )
        .unwrap_err();
        assert_eq!(err, DomainError::PastDate(yesterday));
    }

    #[test]
    fn create_new_accepts_today() {
        let today = Utc::now().date_naive();
        let booking = Booking::create_new(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "client@example.com",
            today,
            "09:00",
            "10:00",
        )
        .unwrap();
        assert!(booking.is_active());
    }

    #[test]
    fn reconstruction_allows_past_dates() {
        let yesterday = Utc::now().date_naive() - Duration::days(1);
        let booking = sample_booking(Uuid::new_v4(), yesterday, "09:00", "10:00");
        assert_eq!(booking.date(), yesterday);
    }

    #[test]
    fn create_propagates_value_object_failures() {
        let result = Booking::create(
            Uuid::new_v4(),
            Uuid::new_v4(),
            "not-an-email",
            date(2030, 6, 1),
            "09:00",
            "10:00",
            BookingStatus::Active,
            Utc::now(),
            Utc::now(),
        );
        assert!(matches!(result, Err(DomainError::InvalidFormat(_))));
    }

    #[test]
    fn cancel_then_cancel_again_fails() {
        let mut booking = sample_booking(Uuid::new_v4(), date(2030, 6, 1), "09:00", "10:00");
        booking.cancel().unwrap();
        assert_eq!(booking.status(), BookingStatus::Cancelled);

        let err = booking.cancel().unwrap_err();
        assert!(matches!(err, DomainError::InvalidStateTransition(_)));
    }

    #[test]
    fn complete_requires_active_status() {
        let mut booking = sample_booking(Uuid::new_v4(), date(2030, 6, 1), "09:00", "10:00");
        booking.complete().unwrap();
        assert_eq!(booking.status(), BookingStatus::Completed);

        assert!(booking.complete().is_err());
        assert!(booking.cancel().is_err());
    }

    #[test]
    fn conflicts_when_same_space_date_and_overlap() {
        let space = Uuid::new_v4();
        let a = sample_booking(space, date(2030, 6, 1), "09:00", "10:30");
        let b = sample_booking(space, date(2030, 6, 1), "10:00", "11:00");
        assert!(a.conflicts_with(&b));
        assert!(b.conflicts_with(&a));
    }

    #[test]
    fn no_conflict_across_spaces_or_dates() {
        let a = sample_booking(Uuid::new_v4(), date(2030, 6, 1), "09:00", "10:30");
        let other_space = sample_booking(Uuid::new_v4(), date(2030, 6, 1), "09:00", "10:30");
        assert!(!a.conflicts_with(&other_space));

        let space = Uuid::new_v4();
        let b = sample_booking(space, date(2030, 6, 1), "09:00", "10:30");
        let other_day = sample_booking(space, date(2030, 6, 2), "09:00", "10:30");
        assert!(!b.conflicts_with(&other_day));
    }

    #[test]
    fn no_conflict_when_either_side_is_not_active() {
        let space = Uuid::new_v4();
        let a = sample_booking(space, date(2030, 6, 1), "09:00", "10:30");
        let mut b = sample_booking(space, date(2030, 6, 1), "10:00", "11:00");
        b.cancel().unwrap();
        assert!(!a.conflicts_with(&b));
        assert!(!b.conflicts_with(&a));
    }

    #[test]
    fn no_conflict_for_touching_slots() {
        let space = Uuid::new_v4();
        let a = sample_booking(space, date(2030, 6, 1), "09:00", "10:00");
        let b = sample_booking(space, date(2030, 6, 1), "10:00", "11:00");
        assert!(!a.conflicts_with(&b));
    }

    #[test]
    fn status_display_round_trips() {
        for status in [
            BookingStatus::Active,
            BookingStatus::Cancelled,
            BookingStatus::Completed,
        ] {
            assert_eq!(BookingStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(BookingStatus::from_str("UNKNOWN"), None);
    }

    #[test]
    fn status_serializes_as_screaming_snake_case() {
        let json = serde_json::to_string(&BookingStatus::Cancelled).unwrap();
        assert_eq!(json, "\"CANCELLED\"");

        let back: BookingStatus = serde_json::from_str("\"ACTIVE\"").unwrap();
        assert_eq!(back, BookingStatus::Active);
    }
}

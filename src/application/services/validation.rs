//! Booking business-rule validation
//!
//! Decides the admissibility of a candidate booking against repository
//! state. Violations are collected rather than failed-fast so the caller
//! can surface every problem in one round trip; the only short-circuit
//! is the space-existence precondition, because no other rule can be
//! evaluated without a space.

use std::sync::Arc;

use chrono::NaiveDate;
use uuid::Uuid;

use crate::config::Config;
use crate::domain::{
    Booking, BookingStatus, BookingsRepository, DateService, SpacesRepository,
};
use crate::shared::types::errors::DomainResult;

// Placeholder identity for the transient probe booking used in the
// conflict scan.
const PROBE_EMAIL: &str = "temp@test.com";

/// Outcome of a validation run: the aggregated violation list, in the
/// order the checks ran (availability, weekly limit, conflict).
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    errors: Vec<String>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }

    fn push(&mut self, error: impl Into<String>) {
        self.errors.push(error.into());
    }
}

/// Orchestrates conflict detection and quota enforcement for new or
/// rescheduled bookings.
pub struct BookingValidationService {
    bookings: Arc<dyn BookingsRepository>,
    spaces: Arc<dyn SpacesRepository>,
    dates: Arc<dyn DateService>,
    config: Config,
}

impl BookingValidationService {
    pub fn new(
        bookings: Arc<dyn BookingsRepository>,
        spaces: Arc<dyn SpacesRepository>,
        dates: Arc<dyn DateService>,
        config: Config,
    ) -> Self {
        Self {
            bookings,
            spaces,
            dates,
            config,
        }
    }

    /// Check a candidate (space, client, date, slot) against every
    /// business rule.
    ///
    /// `exclude_booking_id` removes one booking from both the weekly
    /// count and the conflict scan, so revalidating an update never
    /// collides with the booking's own row.
    pub async fn validate_new_booking(
        &self,
        space_id: Uuid,
        client_email: &str,
        date: NaiveDate,
        start_time: &str,
        end_time: &str,
        exclude_booking_id: Option<Uuid>,
    ) -> DomainResult<ValidationReport> {
        let mut report = ValidationReport::default();

        let Some(space) = self.spaces.find_by_id(space_id).await? else {
            report.push("The specified space does not exist");
            return Ok(report);
        };

        if !space.can_be_booked() {
            report.push("The space is not available for bookings");
        }

        self.check_client_weekly_limit(&mut report, client_email, date, exclude_booking_id)
            .await?;

        self.check_time_slot_conflicts(
            &mut report,
            space_id,
            date,
            start_time,
            end_time,
            exclude_booking_id,
        )
        .await?;

        Ok(report)
    }

    async fn check_client_weekly_limit(
        &self,
        report: &mut ValidationReport,
        client_email: &str,
        date: NaiveDate,
        exclude_booking_id: Option<Uuid>,
    ) -> DomainResult<()> {
        let week_start = self.dates.start_of_week(date);
        let week_end = self.dates.end_of_week(date);

        let active = self
            .bookings
            .find_active_by_client_in_week(client_email, week_start, week_end)
            .await?;

        let count = active
            .iter()
            .filter(|b| exclude_booking_id != Some(b.id()))
            .count();

        if count >= self.config.max_bookings_per_week {
            report.push(format!(
                "You have reached the limit of {} bookings per week",
                self.config.max_bookings_per_week
            ));
        }

        Ok(())
    }

    async fn check_time_slot_conflicts(
        &self,
        report: &mut ValidationReport,
        space_id: Uuid,
        date: NaiveDate,
        start_time: &str,
        end_time: &str,
        exclude_booking_id: Option<Uuid>,
    ) -> DomainResult<()> {
        let existing = self.bookings.find_by_space_and_date(space_id, date).await?;

        // A malformed candidate slot becomes a report error instead of
        // propagating out of the validation run.
        let now = self.dates.now();
        let probe = match Booking::create(
            Uuid::nil(),
            space_id,
            PROBE_EMAIL,
            date,
            start_time,
            end_time,
            BookingStatus::Active,
            now,
            now,
        ) {
            Ok(probe) => probe,
            Err(err) => {
                report.push(err.to_string());
                return Ok(());
            }
        };

        let conflicting = existing
            .iter()
            .filter(|b| b.is_active() && exclude_booking_id != Some(b.id()))
            .find(|b| probe.conflicts_with(b));

        if let Some(booking) = conflicting {
            report.push(format!(
                "A booking already exists in that time slot ({}-{})",
                booking.start_time(),
                booking.end_time()
            ));
        }

        Ok(())
    }
}

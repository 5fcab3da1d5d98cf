//! Space availability read model

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use uuid::Uuid;

use crate::config::Config;
use crate::domain::{Booking, BookingsRepository, TimeSlot};
use crate::shared::types::errors::DomainResult;

/// One segment of a space's daily timeline.
#[derive(Debug, Clone, Serialize)]
pub struct SlotAvailability {
    pub start_time: String,
    pub end_time: String,
    pub available: bool,
    pub booking_id: Option<Uuid>,
}

/// Derives the free/occupied timeline of a space for display.
///
/// Read-only: validation never consults this service.
pub struct AvailabilityService {
    bookings: Arc<dyn BookingsRepository>,
    config: Config,
}

impl AvailabilityService {
    pub fn new(bookings: Arc<dyn BookingsRepository>, config: Config) -> Self {
        Self { bookings, config }
    }

    /// Ordered, gapless timeline of the working-hours window for a space
    /// on a date, alternating free and occupied segments.
    pub async fn space_availability(
        &self,
        space_id: Uuid,
        date: NaiveDate,
    ) -> DomainResult<Vec<SlotAvailability>> {
        let window = TimeSlot::create(
            &self.config.working_hours_start,
            &self.config.working_hours_end,
        )?;

        let day_bookings = self.bookings.find_by_space_and_date(space_id, date).await?;

        let mut active: Vec<Booking> = day_bookings
            .into_iter()
            .filter(|b| b.is_active())
            .collect();
        active.sort_by_key(|b| b.slot().start_minutes());

        Ok(Self::walk_slots(&window, &active))
    }

    // Cursor advances in minutes-since-midnight; the stored strings are
    // only carried for display. A lexicographic compare would misorder
    // times entered without a leading zero on the hour.
    fn walk_slots(window: &TimeSlot, active: &[Booking]) -> Vec<SlotAvailability> {
        let mut slots = Vec::new();
        let mut cursor = window.start_time();
        let mut cursor_minutes = window.start_minutes();

        for booking in active {
            let slot = booking.slot();

            if cursor_minutes < slot.start_minutes() {
                slots.push(SlotAvailability {
                    start_time: cursor.to_string(),
                    end_time: slot.start_time().to_string(),
                    available: true,
                    booking_id: None,
                });
            }

            slots.push(SlotAvailability {
                start_time: slot.start_time().to_string(),
                end_time: slot.end_time().to_string(),
                available: false,
                booking_id: Some(booking.id()),
            });

            cursor = slot.end_time();
            cursor_minutes = slot.end_minutes();
        }

        if cursor_minutes < window.end_minutes() {
            slots.push(SlotAvailability {
                start_time: cursor.to_string(),
                end_time: window.end_time().to_string(),
                available: true,
                booking_id: None,
            });
        }

        slots
    }
}

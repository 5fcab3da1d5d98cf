//! Booking use-case orchestration
//!
//! Thin sequencers: log intent, run business-rule validation, construct
//! or mutate the entity, persist, log outcome. Errors from lower layers
//! propagate untouched.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{error, info};
use uuid::Uuid;

use super::validation::BookingValidationService;
use crate::application::dto::{CreateBookingDto, UpdateBookingDto};
use crate::domain::{Booking, BookingFilters, BookingsRepository, SpacesRepository};
use crate::shared::types::errors::{DomainError, DomainResult};
use crate::shared::types::pagination::{PaginatedResult, PaginationParams};

// Listing by space/client reuses the paginated query with a wide page.
const UNPAGED: PaginationParams = PaginationParams {
    page: 1,
    limit: 1000,
};

pub struct BookingService {
    bookings: Arc<dyn BookingsRepository>,
    spaces: Arc<dyn SpacesRepository>,
    validation: BookingValidationService,
}

impl BookingService {
    pub fn new(
        bookings: Arc<dyn BookingsRepository>,
        spaces: Arc<dyn SpacesRepository>,
        validation: BookingValidationService,
    ) -> Self {
        Self {
            bookings,
            spaces,
            validation,
        }
    }

    pub async fn get_all_bookings(
        &self,
        params: PaginationParams,
        filters: &BookingFilters,
    ) -> DomainResult<PaginatedResult<Booking>> {
        info!(
            page = params.page,
            limit = params.limit,
            "Getting bookings with pagination"
        );
        self.bookings.find_all(params, filters).await
    }

    pub async fn get_booking_by_id(&self, id: Uuid) -> DomainResult<Booking> {
        info!(%id, "Getting booking by ID");

        self.bookings
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound {
                entity: "Booking",
                id: id.to_string(),
            })
    }

    /// Create a booking after running the full business-rule validation.
    pub async fn create_booking(&self, dto: CreateBookingDto) -> DomainResult<Booking> {
        info!(
            space_id = %dto.space_id,
            client_email = %dto.client_email,
            date = %dto.date,
            "Creating new booking"
        );

        let date = parse_date(&dto.date)?;

        let report = self
            .validation
            .validate_new_booking(
                dto.space_id,
                &dto.client_email,
                date,
                &dto.start_time,
                &dto.end_time,
                None,
            )
            .await?;

        if !report.is_valid() {
            let err = DomainError::ValidationFailed(report.into_errors());
            error!(error = %err, space_id = %dto.space_id, "Error in booking validation");
            return Err(err);
        }

        let booking = Booking::create_new(
            Uuid::new_v4(),
            dto.space_id,
            &dto.client_email,
            date,
            &dto.start_time,
            &dto.end_time,
        )?;

        let created = self.bookings.create(booking).await?;

        info!(id = %created.id(), space_id = %dto.space_id, date = %dto.date, "Booking created successfully");

        Ok(created)
    }

    /// Reschedule an active booking, revalidating when any of
    /// date/start/end changes. The updated entity keeps its id, status and
    /// created_at; updated_at is set to now.
    pub async fn update_booking(&self, dto: UpdateBookingDto) -> DomainResult<Booking> {
        info!(id = %dto.id, "Updating booking");

        let existing = self.get_booking_by_id(dto.id).await?;

        if !existing.is_active() {
            return Err(DomainError::InvalidStateTransition(
                "Only active bookings can be modified",
            ));
        }

        let new_date = match &dto.date {
            Some(raw) => parse_date(raw)?,
            None => existing.date(),
        };
        let new_start = dto.start_time.as_deref().unwrap_or(existing.start_time());
        let new_end = dto.end_time.as_deref().unwrap_or(existing.end_time());

        let schedule_changed =
            dto.date.is_some() || dto.start_time.is_some() || dto.end_time.is_some();
        if schedule_changed {
            // The booking's own id is excluded so it cannot conflict with
            // itself or inflate the client's weekly count.
            let report = self
                .validation
                .validate_new_booking(
                    existing.space_id(),
                    existing.client_email().as_str(),
                    new_date,
                    new_start,
                    new_end,
                    Some(existing.id()),
                )
                .await?;

            if !report.is_valid() {
                return Err(DomainError::ValidationFailed(report.into_errors()));
            }
        }

        let updated = Booking::create(
            existing.id(),
            existing.space_id(),
            existing.client_email().as_str(),
            new_date,
            new_start,
            new_end,
            existing.status(),
            existing.created_at(),
            Utc::now(),
        )?;

        let saved = self.bookings.update(updated).await?;

        info!(id = %dto.id, "Booking updated successfully");

        Ok(saved)
    }

    pub async fn cancel_booking(&self, id: Uuid) -> DomainResult<Booking> {
        info!(%id, "Cancelling booking");

        let mut booking = self.get_booking_by_id(id).await?;
        booking.cancel()?;

        let updated = self.bookings.update(booking).await?;

        info!(%id, "Booking cancelled successfully");

        Ok(updated)
    }

    pub async fn delete_booking(&self, id: Uuid) -> DomainResult<()> {
        info!(%id, "Deleting booking");

        if !self.bookings.exists_by_id(id).await? {
            return Err(DomainError::NotFound {
                entity: "Booking",
                id: id.to_string(),
            });
        }

        self.bookings.delete(id).await?;

        info!(%id, "Booking deleted successfully");

        Ok(())
    }

    pub async fn get_bookings_by_space(&self, space_id: Uuid) -> DomainResult<Vec<Booking>> {
        info!(%space_id, "Getting bookings by space");

        if !self.spaces.exists_by_id(space_id).await? {
            return Err(DomainError::NotFound {
                entity: "Space",
                id: space_id.to_string(),
            });
        }

        let filters = BookingFilters {
            space_id: Some(space_id),
            ..Default::default()
        };
        let page = self.bookings.find_all(UNPAGED, &filters).await?;
        Ok(page.items)
    }

    pub async fn get_bookings_by_client(&self, client_email: &str) -> DomainResult<Vec<Booking>> {
        info!(client_email, "Getting bookings by client");

        let filters = BookingFilters {
            client_email: Some(client_email.to_string()),
            ..Default::default()
        };
        let page = self.bookings.find_all(UNPAGED, &filters).await?;
        Ok(page.items)
    }
}

fn parse_date(raw: &str) -> DomainResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|_| DomainError::InvalidFormat(format!("Invalid date: {raw}. Use YYYY-MM-DD")))
}

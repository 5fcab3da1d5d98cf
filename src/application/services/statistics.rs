//! Space usage statistics read model

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{BookingFilters, BookingStatus, BookingsRepository, SpacesRepository};
use crate::shared::types::errors::{DomainError, DomainResult};
use crate::shared::types::pagination::PaginationParams;

/// Monthly usage summary for a space.
#[derive(Debug, Clone, Serialize)]
pub struct SpaceStats {
    pub total_bookings: usize,
    pub active_bookings: usize,
    pub cancelled_bookings: usize,
    /// Percentage of days in the month with at least one active booking
    pub occupancy_rate: f64,
}

/// Derived read-only occupancy view over the booking history.
pub struct StatisticsService {
    bookings: Arc<dyn BookingsRepository>,
    spaces: Arc<dyn SpacesRepository>,
}

impl StatisticsService {
    pub fn new(bookings: Arc<dyn BookingsRepository>, spaces: Arc<dyn SpacesRepository>) -> Self {
        Self { bookings, spaces }
    }

    /// Statistics for a space over one calendar month.
    pub async fn space_statistics(
        &self,
        space_id: Uuid,
        month: u32,
        year: i32,
    ) -> DomainResult<SpaceStats> {
        let first_day = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| DomainError::InvalidFormat(format!("Invalid month: {year}-{month}")))?;
        let last_day = last_day_of_month(first_day)?;

        let filters = BookingFilters {
            space_id: Some(space_id),
            ..Default::default()
        };
        let params = PaginationParams {
            page: 1,
            limit: 1000,
        };

        // Independent reads, fetched together.
        let (space, page) = tokio::join!(
            self.spaces.find_by_id(space_id),
            self.bookings.find_all(params, &filters),
        );

        if space?.is_none() {
            return Err(DomainError::NotFound {
                entity: "Space",
                id: space_id.to_string(),
            });
        }
        let page = page?;

        let in_month: Vec<_> = page
            .items
            .iter()
            .filter(|b| b.date() >= first_day && b.date() <= last_day)
            .collect();

        let active = in_month.iter().filter(|b| b.is_active()).count();
        let cancelled = in_month
            .iter()
            .filter(|b| b.status() == BookingStatus::Cancelled)
            .count();

        let days_with_bookings: HashSet<NaiveDate> = in_month
            .iter()
            .filter(|b| b.is_active())
            .map(|b| b.date())
            .collect();
        let occupancy_rate =
            days_with_bookings.len() as f64 / f64::from(last_day.day()) * 100.0;

        Ok(SpaceStats {
            total_bookings: in_month.len(),
            active_bookings: active,
            cancelled_bookings: cancelled,
            occupancy_rate,
        })
    }
}

fn last_day_of_month(first_day: NaiveDate) -> DomainResult<NaiveDate> {
    let (year, month) = if first_day.month() == 12 {
        (first_day.year() + 1, 1)
    } else {
        (first_day.year(), first_day.month() + 1)
    };
    let next_first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        DomainError::InvalidFormat(format!("Invalid month: {year}-{month}"))
    })?;
    Ok(next_first - Duration::days(1))
}

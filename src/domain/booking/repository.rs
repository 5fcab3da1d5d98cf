//! Bookings repository interface

use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

use super::model::{Booking, BookingStatus};
use crate::shared::types::errors::DomainResult;
use crate::shared::types::pagination::{PaginatedResult, PaginationParams};

/// Query filters for booking listings. All fields are optional and
/// combine with AND semantics.
#[derive(Debug, Clone, Default)]
pub struct BookingFilters {
    /// Exact space match
    pub space_id: Option<Uuid>,
    /// Case-insensitive substring match on the client email
    pub client_email: Option<String>,
    /// Exact calendar-date match
    pub date: Option<NaiveDate>,
    /// Exact status match
    pub status: Option<BookingStatus>,
}

#[async_trait]
pub trait BookingsRepository: Send + Sync {
    async fn find_all(
        &self,
        params: PaginationParams,
        filters: &BookingFilters,
    ) -> DomainResult<PaginatedResult<Booking>>;

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Booking>>;

    /// Every booking (any status) for a space on a calendar date.
    async fn find_by_space_and_date(
        &self,
        space_id: Uuid,
        date: NaiveDate,
    ) -> DomainResult<Vec<Booking>>;

    /// Active bookings for a client within the inclusive `[start, end]`
    /// date range. The email is matched exactly after normalization.
    async fn find_active_by_client_in_week(
        &self,
        client_email: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<Booking>>;

    async fn create(&self, booking: Booking) -> DomainResult<Booking>;

    async fn update(&self, booking: Booking) -> DomainResult<Booking>;

    async fn delete(&self, id: Uuid) -> DomainResult<()>;

    async fn exists_by_id(&self, id: Uuid) -> DomainResult<bool>;
}

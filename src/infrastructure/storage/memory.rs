//! In-memory repository implementations for development and testing

use async_trait::async_trait;
use chrono::NaiveDate;
use dashmap::DashMap;
use uuid::Uuid;

use crate::domain::{Booking, BookingFilters, BookingsRepository, Space, SpacesRepository};
use crate::shared::types::errors::{DomainError, DomainResult};
use crate::shared::types::pagination::{PaginatedResult, PaginationParams};

/// In-memory bookings store backed by `DashMap`.
#[derive(Default)]
pub struct InMemoryBookingsRepository {
    bookings: DashMap<Uuid, Booking>,
}

impl InMemoryBookingsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn matches(booking: &Booking, filters: &BookingFilters) -> bool {
        if let Some(space_id) = filters.space_id {
            if booking.space_id() != space_id {
                return false;
            }
        }
        if let Some(needle) = &filters.client_email {
            // Stored emails are normalized to lower-case already.
            if !booking
                .client_email()
                .as_str()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }
        if let Some(date) = filters.date {
            if booking.date() != date {
                return false;
            }
        }
        if let Some(status) = filters.status {
            if booking.status() != status {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl BookingsRepository for InMemoryBookingsRepository {
    async fn find_all(
        &self,
        params: PaginationParams,
        filters: &BookingFilters,
    ) -> DomainResult<PaginatedResult<Booking>> {
        let mut items: Vec<Booking> = self
            .bookings
            .iter()
            .filter(|entry| Self::matches(entry.value(), filters))
            .map(|entry| entry.value().clone())
            .collect();
        items.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        let total = items.len() as u64;
        // page and limit come straight from the caller; saturate instead
        // of trusting the product to fit.
        let offset = (params.page as usize)
            .saturating_sub(1)
            .saturating_mul(params.limit as usize);
        let page_items: Vec<Booking> = items
            .into_iter()
            .skip(offset)
            .take(params.limit as usize)
            .collect();

        Ok(PaginatedResult::new(
            page_items,
            total,
            params.page,
            params.limit,
        ))
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Booking>> {
        Ok(self.bookings.get(&id).map(|entry| entry.value().clone()))
    }

    async fn find_by_space_and_date(
        &self,
        space_id: Uuid,
        date: NaiveDate,
    ) -> DomainResult<Vec<Booking>> {
        Ok(self
            .bookings
            .iter()
            .filter(|entry| entry.space_id() == space_id && entry.date() == date)
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn find_active_by_client_in_week(
        &self,
        client_email: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> DomainResult<Vec<Booking>> {
        let normalized = client_email.trim().to_lowercase();
        Ok(self
            .bookings
            .iter()
            .filter(|entry| {
                let b = entry.value();
                b.is_active()
                    && b.client_email().as_str() == normalized
                    && b.date() >= start
                    && b.date() <= end
            })
            .map(|entry| entry.value().clone())
            .collect())
    }

    async fn create(&self, booking: Booking) -> DomainResult<Booking> {
        if self.bookings.contains_key(&booking.id()) {
            return Err(DomainError::Storage(format!(
                "Booking already exists: {}",
                booking.id()
            )));
        }
        self.bookings.insert(booking.id(), booking.clone());
        Ok(booking)
    }

    async fn update(&self, booking: Booking) -> DomainResult<Booking> {
        if !self.bookings.contains_key(&booking.id()) {
            return Err(DomainError::NotFound {
                entity: "Booking",
                id: booking.id().to_string(),
            });
        }
        self.bookings.insert(booking.id(), booking.clone());
        Ok(booking)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.bookings
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::NotFound {
                entity: "Booking",
                id: id.to_string(),
            })
    }

    async fn exists_by_id(&self, id: Uuid) -> DomainResult<bool> {
        Ok(self.bookings.contains_key(&id))
    }
}

/// In-memory spaces store backed by `DashMap`.
#[derive(Default)]
pub struct InMemorySpacesRepository {
    spaces: DashMap<Uuid, Space>,
}

impl InMemorySpacesRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SpacesRepository for InMemorySpacesRepository {
    async fn find_all(&self) -> DomainResult<Vec<Space>> {
        let mut spaces: Vec<Space> = self
            .spaces
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        spaces.sort_by(|a, b| a.created_at().cmp(&b.created_at()));
        Ok(spaces)
    }

    async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<Space>> {
        Ok(self.spaces.get(&id).map(|entry| entry.value().clone()))
    }

    async fn create(&self, space: Space) -> DomainResult<Space> {
        if self.spaces.contains_key(&space.id()) {
            return Err(DomainError::Storage(format!(
                "Space already exists: {}",
                space.id()
            )));
        }
        self.spaces.insert(space.id(), space.clone());
        Ok(space)
    }

    async fn update(&self, space: Space) -> DomainResult<Space> {
        if !self.spaces.contains_key(&space.id()) {
            return Err(DomainError::NotFound {
                entity: "Space",
                id: space.id().to_string(),
            });
        }
        self.spaces.insert(space.id(), space.clone());
        Ok(space)
    }

    async fn delete(&self, id: Uuid) -> DomainResult<()> {
        self.spaces
            .remove(&id)
            .map(|_| ())
            .ok_or(DomainError::NotFound {
                entity: "Space",
                id: id.to_string(),
            })
    }

    async fn exists_by_id(&self, id: Uuid) -> DomainResult<bool> {
        Ok(self.spaces.contains_key(&id))
    }
}

//! # Space Booking Core
//!
//! Booking-conflict validation and domain-invariant engine for shared,
//! schedulable spaces: value objects, aggregate roots, business-rule
//! validation, and use-case orchestration over abstract repository ports.
//!
//! ## Architecture
//!
//! The crate follows Clean Architecture principles:
//!
//! - **domain**: Entities, value objects, and repository interfaces
//! - **application**: Use cases, business-rule validation, read models
//! - **infrastructure**: Reference adapters (in-memory storage)
//! - **shared**: Cross-cutting types (errors, pagination)
//!
//! HTTP routing, SQL persistence and process bootstrap are external
//! collaborators; they consume this crate through the service types and
//! implement the repository ports.

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod shared;

pub use config::Config;

// Re-export the core surface for easy access
pub use application::{
    AvailabilityService, BookingService, BookingValidationService, CreateBookingDto,
    CreateSpaceDto, SlotAvailability, SpaceService, SpaceStats, StatisticsService,
    UpdateBookingDto, UpdateSpaceDto, ValidationReport,
};
pub use domain::{
    Booking, BookingFilters, BookingStatus, BookingsRepository, DateService, Email, Space,
    SpacesRepository, SystemDateService, TimeSlot,
};
pub use infrastructure::{InMemoryBookingsRepository, InMemorySpacesRepository};
pub use shared::{DomainError, DomainResult, PaginatedResult, PaginationParams};

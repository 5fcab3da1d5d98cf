//! Business logic and use-case orchestration

pub mod dto;
pub mod services;

pub use dto::{CreateBookingDto, CreateSpaceDto, UpdateBookingDto, UpdateSpaceDto};
pub use services::{
    AvailabilityService, BookingService, BookingValidationService, SlotAvailability, SpaceService,
    SpaceStats, StatisticsService, ValidationReport,
};

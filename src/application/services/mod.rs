//! Application services
//!
//! Business-rule validation plus the use-case orchestrators and derived
//! read models built on top of the repository ports.

pub mod availability;
pub mod bookings;
pub mod spaces;
pub mod statistics;
pub mod validation;

pub use availability::{AvailabilityService, SlotAvailability};
pub use bookings::BookingService;
pub use spaces::SpaceService;
pub use statistics::{SpaceStats, StatisticsService};
pub use validation::{BookingValidationService, ValidationReport};

//! Core business entities, value objects, and repository interfaces

pub mod booking;
pub mod dates;
pub mod email;
pub mod space;
pub mod time_slot;

pub use booking::{Booking, BookingFilters, BookingStatus, BookingsRepository};
pub use dates::{DateService, SystemDateService};
pub use email::Email;
pub use space::{Space, SpacesRepository};
pub use time_slot::TimeSlot;

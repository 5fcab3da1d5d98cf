//! External concerns (storage adapters)

pub mod storage;

pub use storage::{InMemoryBookingsRepository, InMemorySpacesRepository};

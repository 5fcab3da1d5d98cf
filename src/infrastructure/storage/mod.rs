//! Storage adapters
//!
//! The repository ports live in `domain`; this module carries the
//! in-memory reference implementation. A database-backed adapter plugs
//! in behind the same traits.

pub mod memory;

pub use memory::{InMemoryBookingsRepository, InMemorySpacesRepository};

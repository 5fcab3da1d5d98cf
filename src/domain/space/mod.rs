//! Space aggregate
//!
//! Contains the Space entity and its repository interface.

pub mod model;
pub mod repository;

pub use model::Space;
pub use repository::SpacesRepository;

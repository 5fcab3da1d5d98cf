//! Space domain entity

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::types::errors::{DomainError, DomainResult};

/// Bookable space (meeting room, desk, event area).
///
/// Constructed only through [`Space::create`]; fields are immutable after
/// construction — edits are modeled as a new instance carrying the same id.
#[derive(Debug, Clone, PartialEq)]
pub struct Space {
    id: Uuid,
    name: String,
    location: String,
    capacity: i32,
    description: Option<String>,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Space {
    /// Build a space, enforcing the capacity invariant.
    ///
    /// `name` and `location` are trimmed; a missing or whitespace-only
    /// description collapses to `None`.
    #[allow(clippy::too_many_arguments)]
    pub fn create(
        id: Uuid,
        name: &str,
        location: &str,
        capacity: i32,
        description: Option<&str>,
        active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<Self> {
        if capacity <= 0 {
            return Err(DomainError::InvalidCapacity(capacity));
        }

        let description = description
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(String::from);

        Ok(Self {
            id,
            name: name.trim().to_string(),
            location: location.trim().to_string(),
            capacity,
            description,
            active,
            created_at,
            updated_at,
        })
    }

    /// Factory for a brand-new active space.
    pub fn create_new(
        id: Uuid,
        name: &str,
        location: &str,
        capacity: i32,
        description: Option<&str>,
    ) -> DomainResult<Self> {
        let now = Utc::now();
        Self::create(id, name, location, capacity, description, true, now, now)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// A space can be booked while it is active.
    pub fn can_be_booked(&self) -> bool {
        self.active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_capacity_is_rejected() {
        let err = Space::create_new(Uuid::new_v4(), "Room A", "Floor 1", 0, None).unwrap_err();
        assert_eq!(err, DomainError::InvalidCapacity(0));

        let err = Space::create_new(Uuid::new_v4(), "Room A", "Floor 1", -5, None).unwrap_err();
        assert_eq!(err, DomainError::InvalidCapacity(-5));
    }

    #[test]
    fn capacity_one_is_accepted() {
        let space = Space::create_new(Uuid::new_v4(), "Phone booth", "Floor 2", 1, None).unwrap();
        assert_eq!(space.capacity(), 1);
    }

    #[test]
    fn trims_name_location_and_description() {
        let space = Space::create_new(
            Uuid::new_v4(),
            "  Room A  ",
            " Floor 1 ",
            4,
            Some("  quiet corner  "),
        )
        .unwrap();
        assert_eq!(space.name(), "Room A");
        assert_eq!(space.location(), "Floor 1");
        assert_eq!(space.description(), Some("quiet corner"));
    }

    #[test]
    fn empty_description_collapses_to_none() {
        let space = Space::create_new(Uuid::new_v4(), "Room A", "Floor 1", 4, Some("   ")).unwrap();
        assert_eq!(space.description(), None);
    }

    #[test]
    fn only_active_spaces_can_be_booked() {
        let now = Utc::now();
        let active =
            Space::create(Uuid::new_v4(), "Room A", "Floor 1", 4, None, true, now, now).unwrap();
        let inactive =
            Space::create(Uuid::new_v4(), "Room B", "Floor 1", 4, None, false, now, now).unwrap();

        assert!(active.can_be_booked());
        assert!(!inactive.can_be_booked());
    }
}

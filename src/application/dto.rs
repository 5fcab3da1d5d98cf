//! Use-case input DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to create a new booking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingDto {
    /// Space to reserve
    pub space_id: Uuid,
    /// Client email address
    pub client_email: String,
    /// Booking date (ISO `YYYY-MM-DD`)
    pub date: String,
    /// Slot start (HH:MM)
    pub start_time: String,
    /// Slot end (HH:MM)
    pub end_time: String,
}

/// Partial update of a booking's schedule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateBookingDto {
    pub id: Uuid,
    /// New date (ISO `YYYY-MM-DD`), unchanged when absent
    pub date: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
}

/// Request to create a new space
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSpaceDto {
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub description: Option<String>,
}

/// Partial update of a space
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSpaceDto {
    pub id: Uuid,
    pub name: Option<String>,
    pub location: Option<String>,
    pub capacity: Option<i32>,
    pub description: Option<String>,
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_booking_dto_deserializes() {
        let dto: CreateBookingDto = serde_json::from_str(
            r#"{
                "space_id": "7f2c1f6e-24a0-4c5b-9a2e-0a8f4f6f2d11",
                "client_email": "client@example.com",
                "date": "2030-06-01",
                "start_time": "09:00",
                "end_time": "10:00"
            }"#,
        )
        .unwrap();
        assert_eq!(dto.client_email, "client@example.com");
        assert_eq!(dto.date, "2030-06-01");
    }

    #[test]
    fn update_booking_dto_fields_default_to_none() {
        let dto: UpdateBookingDto = serde_json::from_str(
            r#"{"id": "7f2c1f6e-24a0-4c5b-9a2e-0a8f4f6f2d11", "start_time": "11:00"}"#,
        )
        .unwrap();
        assert_eq!(dto.start_time.as_deref(), Some("11:00"));
        assert!(dto.date.is_none());
        assert!(dto.end_time.is_none());
    }
}

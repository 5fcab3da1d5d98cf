//! Configuration module

/// Booking policy configuration injected into the services.
///
/// These are deployment-level knobs, not run-time features: the services
/// read them once at construction.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum active bookings per client per week
    pub max_bookings_per_week: usize,
    /// Start of the bookable working-hours window (HH:MM)
    pub working_hours_start: String,
    /// End of the bookable working-hours window (HH:MM)
    pub working_hours_end: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_bookings_per_week: 3,
            working_hours_start: "08:00".to_string(),
            working_hours_end: "18:00".to_string(),
        }
    }
}

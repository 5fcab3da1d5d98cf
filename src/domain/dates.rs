//! Clock and calendar arithmetic port

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};

/// Clock abstraction used by the services.
///
/// Weeks run Monday through Sunday. Only `now` is abstract; the
/// calendar arithmetic is pure and shared by every implementation.
pub trait DateService: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }

    fn add_days(&self, date: NaiveDate, days: i64) -> NaiveDate {
        date + Duration::days(days)
    }

    /// Monday of the week containing `date`.
    fn start_of_week(&self, date: NaiveDate) -> NaiveDate {
        date - Duration::days(date.weekday().num_days_from_monday() as i64)
    }

    /// Sunday of the week containing `date`.
    fn end_of_week(&self, date: NaiveDate) -> NaiveDate {
        self.start_of_week(date) + Duration::days(6)
    }

    fn is_same_date(&self, a: NaiveDate, b: NaiveDate) -> bool {
        a == b
    }

    /// ISO `YYYY-MM-DD`.
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}

/// System clock implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemDateService;

impl DateService for SystemDateService {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

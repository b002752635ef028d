//! Default date windows for data pulls.
//!
//! Operators usually leave the date inputs empty; the console then asks for a
//! short window around today. Explicit values are forwarded verbatim because
//! the shim server owns range validation.

use chrono::{Days, NaiveDate};

/// Days subtracted from today when no start date is supplied.
pub const DEFAULT_START_OFFSET_DAYS: u64 = 2;

/// Days added to today when no end date is supplied.
pub const DEFAULT_END_OFFSET_DAYS: u64 = 1;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Start and end dates as sent to `/api/data`, in `YYYY-MM-DD` form when defaulted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateWindow {
    pub start: String,
    pub end: String,
}

impl DateWindow {
    /// Resolves the effective window, defaulting each bound independently.
    ///
    /// An absent or empty bound is replaced; anything else, malformed or not,
    /// is passed through unchanged. `start <= end` is not checked.
    pub fn resolve(start: Option<&str>, end: Option<&str>, today: NaiveDate) -> Self {
        Self {
            start: supplied(start).map(str::to_owned).unwrap_or_else(|| {
                format_date(today.checked_sub_days(Days::new(DEFAULT_START_OFFSET_DAYS)), today)
            }),
            end: supplied(end).map(str::to_owned).unwrap_or_else(|| {
                format_date(today.checked_add_days(Days::new(DEFAULT_END_OFFSET_DAYS)), today)
            }),
        }
    }
}

fn supplied(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

// Shifting only fails at the edges of chrono's calendar; keep today there.
fn format_date(shifted: Option<NaiveDate>, today: NaiveDate) -> String {
    shifted.unwrap_or(today).format(DATE_FORMAT).to_string()
}

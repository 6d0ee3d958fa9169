pub mod booking_client;
pub mod calendar_client;
pub mod messaging_client;
pub mod service_client;

use chrono::{NaiveDate, NaiveTime};
use tracing::warn;

/// Normalizes a server date string to a canonical calendar date. Closed-date
/// matching compares `NaiveDate`s, never raw strings, so a format drift on
/// either side surfaces here instead of silently missing closures.
pub(crate) fn parse_wire_date(raw: &str) -> Option<NaiveDate> {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            warn!("dropping calendar entry with unparseable date {:?}", raw);
            None
        }
    }
}

/// Times are informational only; anything unparseable becomes `None`.
pub(crate) fn parse_wire_time(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}

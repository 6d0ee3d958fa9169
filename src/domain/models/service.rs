use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ADVANCE_BOOKING_DAYS: u32 = 30;

/// Service metadata as returned by the directory endpoint. Populated once
/// per wizard session from the network response; the render layer never
/// acts as a secondary source for these fields.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ServiceInfo {
    pub id: String,
    pub name: String,
    pub price_cents: Option<i64>,
    pub advance_booking_days: u32,
}

impl ServiceInfo {
    /// Inclusive date-picker bounds: `[today, today + advance_booking_days]`.
    /// The validator assumes candidates already fall inside this range.
    pub fn selectable_range(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        (today, today + Duration::days(self.advance_booking_days as i64))
    }
}

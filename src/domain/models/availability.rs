use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A date on which the church takes no bookings at all.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ClosedDate {
    pub date: NaiveDate,
    pub reason: Option<String>,
}

/// A date with non-default operating hours. Informational: the date stays
/// selectable unless it also appears as a [`ClosedDate`].
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpecialHours {
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}

/// Point-in-time calendar exceptions for one church, fetched once per
/// wizard session and owned exclusively by that session.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AvailabilitySnapshot {
    pub church_id: String,
    pub closed_dates: Vec<ClosedDate>,
    pub special_hours: Vec<SpecialHours>,
}

impl AvailabilitySnapshot {
    pub fn empty(church_id: impl Into<String>) -> Self {
        Self {
            church_id: church_id.into(),
            closed_dates: Vec::new(),
            special_hours: Vec::new(),
        }
    }

    pub fn closed_entry(&self, date: NaiveDate) -> Option<&ClosedDate> {
        self.closed_dates.iter().find(|c| c.date == date)
    }

    pub fn special_entry(&self, date: NaiveDate) -> Option<&SpecialHours> {
        self.special_hours.iter().find(|s| s.date == date)
    }
}

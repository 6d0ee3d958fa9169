use crate::domain::models::availability::AvailabilitySnapshot;
use chrono::{NaiveDate, NaiveTime};

/// Classification of a candidate booking date against the church calendar.
#[derive(Debug, Clone, PartialEq)]
pub enum DateStatus {
    /// No calendar exception applies (also returned when no snapshot is
    /// available yet: missing data never blocks a booking).
    Normal,
    /// Non-default operating hours apply; the date stays selectable.
    SpecialHours {
        start_time: Option<NaiveTime>,
        end_time: Option<NaiveTime>,
    },
    /// The church is closed on this date.
    Blocked { reason: Option<String> },
}

impl DateStatus {
    pub fn is_blocked(&self) -> bool {
        matches!(self, DateStatus::Blocked { .. })
    }

    /// Hint or error to surface next to the date picker. `None` means any
    /// prior hint should be cleared.
    pub fn message(&self) -> Option<String> {
        match self {
            DateStatus::Normal => None,
            DateStatus::Blocked { reason } => Some(reason.clone().unwrap_or_else(|| {
                "This date is not available for bookings.".to_string()
            })),
            DateStatus::SpecialHours {
                start_time,
                end_time,
            } => Some(match (start_time, end_time) {
                (Some(start), Some(end)) => format!(
                    "Special hours on this date: {} to {}.",
                    start.format("%H:%M"),
                    end.format("%H:%M")
                ),
                (Some(start), None) => {
                    format!("Special hours on this date: opens {}.", start.format("%H:%M"))
                }
                (None, Some(end)) => {
                    format!("Special hours on this date: closes {}.", end.format("%H:%M"))
                }
                (None, None) => "This date has special operating hours.".to_string(),
            }),
        }
    }
}

/// Classifies a candidate date in priority order: closure first (a hard
/// block, it always wins), then special hours, then normal. Callers keep
/// candidates inside the service's booking window; that range is not
/// re-checked here.
pub fn classify_date(candidate: NaiveDate, snapshot: Option<&AvailabilitySnapshot>) -> DateStatus {
    let Some(snapshot) = snapshot else {
        return DateStatus::Normal;
    };

    if let Some(entry) = snapshot.closed_entry(candidate) {
        return DateStatus::Blocked {
            reason: entry.reason.clone(),
        };
    }

    if let Some(entry) = snapshot.special_entry(candidate) {
        return DateStatus::SpecialHours {
            start_time: entry.start_time,
            end_time: entry.end_time,
        };
    }

    DateStatus::Normal
}

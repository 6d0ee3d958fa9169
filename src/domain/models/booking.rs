use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// The user's in-progress choices. Reset whenever the wizard is closed or
/// reopened for a different service.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WizardSelection {
    pub date: Option<NaiveDate>,
    pub time: Option<NaiveTime>,
    pub notes: Option<String>,
}

impl WizardSelection {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Final selection submitted to the parish API.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct BookingRequest {
    pub service_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BookingConfirmation {
    pub booking_code: String,
}

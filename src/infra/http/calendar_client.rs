use crate::domain::models::availability::{AvailabilitySnapshot, ClosedDate, SpecialHours};
use crate::domain::ports::CalendarProvider;
use crate::error::WizardError;
use crate::infra::http::{parse_wire_date, parse_wire_time};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

pub struct HttpCalendarClient {
    client: Client,
    base_url: String,
}

impl HttpCalendarClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[derive(Deserialize)]
struct AvailabilityPayload {
    success: bool,
    #[serde(default)]
    closed_dates: Vec<ClosedDateDto>,
    #[serde(default)]
    special_hours: Vec<SpecialHoursDto>,
}

#[derive(Deserialize)]
struct ClosedDateDto {
    date: String,
    #[serde(default)]
    reason: Option<String>,
}

#[derive(Deserialize)]
struct SpecialHoursDto {
    date: String,
    #[serde(default)]
    start_time: Option<String>,
    #[serde(default)]
    end_time: Option<String>,
}

#[async_trait]
impl CalendarProvider for HttpCalendarClient {
    async fn fetch_snapshot(&self, church_id: &str) -> Result<AvailabilitySnapshot, WizardError> {
        let url = format!("{}/api/v1/churches/{}/availability", self.base_url, church_id);
        let res = self.client.get(&url).send().await?;

        if !res.status().is_success() {
            return Err(WizardError::Api {
                status: res.status().as_u16(),
                message: res.text().await.unwrap_or_default(),
            });
        }

        let payload: AvailabilityPayload = res.json().await?;
        if !payload.success {
            return Err(WizardError::Api {
                status: 200,
                message: "availability lookup reported failure".to_string(),
            });
        }

        let closed_dates = payload
            .closed_dates
            .into_iter()
            .filter_map(|dto| {
                Some(ClosedDate {
                    date: parse_wire_date(&dto.date)?,
                    reason: dto.reason,
                })
            })
            .collect();

        let special_hours = payload
            .special_hours
            .into_iter()
            .filter_map(|dto| {
                Some(SpecialHours {
                    date: parse_wire_date(&dto.date)?,
                    start_time: dto.start_time.as_deref().and_then(parse_wire_time),
                    end_time: dto.end_time.as_deref().and_then(parse_wire_time),
                })
            })
            .collect();

        Ok(AvailabilitySnapshot {
            church_id: church_id.to_string(),
            closed_dates,
            special_hours,
        })
    }
}

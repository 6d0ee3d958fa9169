use crate::domain::models::booking::{BookingConfirmation, BookingRequest};
use crate::domain::ports::BookingGateway;
use crate::error::{GENERIC_SUBMISSION_ERROR, WizardError};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::info;

pub struct HttpBookingClient {
    client: Client,
    base_url: String,
}

impl HttpBookingClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[derive(Serialize)]
struct BookingPayload<'a> {
    service_id: &'a str,
    date: String,
    time: String,
    notes: Option<&'a str>,
}

#[derive(Deserialize)]
struct BookingOutcome {
    success: bool,
    #[serde(default)]
    booking_code: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    form_errors: Option<HashMap<String, String>>,
}

#[async_trait]
impl BookingGateway for HttpBookingClient {
    async fn submit(
        &self,
        church_id: &str,
        request: &BookingRequest,
    ) -> Result<BookingConfirmation, WizardError> {
        let url = format!("{}/api/v1/churches/{}/bookings", self.base_url, church_id);
        let payload = BookingPayload {
            service_id: &request.service_id,
            date: request.date.format("%Y-%m-%d").to_string(),
            time: request.time.format("%H:%M").to_string(),
            notes: request.notes.as_deref(),
        };

        let res = self.client.post(&url).json(&payload).send().await?;

        // Rejections come back as a normal envelope, usually with a 4xx
        // status, so the body is parsed before the status is judged.
        let status = res.status();
        let outcome: BookingOutcome = res.json().await.map_err(|_| WizardError::Api {
            status: status.as_u16(),
            message: "unexpected response from booking service".to_string(),
        })?;

        if outcome.success {
            let booking_code = outcome.booking_code.ok_or(WizardError::Api {
                status: status.as_u16(),
                message: "booking confirmed without a booking code".to_string(),
            })?;
            info!(booking_code = %booking_code, "booking accepted by server");
            return Ok(BookingConfirmation { booking_code });
        }

        Err(WizardError::Submission {
            message: outcome
                .error
                .unwrap_or_else(|| GENERIC_SUBMISSION_ERROR.to_string()),
            form_errors: outcome.form_errors.unwrap_or_default(),
        })
    }
}

use crate::domain::models::service::{DEFAULT_ADVANCE_BOOKING_DAYS, ServiceInfo};
use crate::domain::ports::ServiceDirectory;
use crate::error::WizardError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

pub struct HttpServiceClient {
    client: Client,
    base_url: String,
}

impl HttpServiceClient {
    pub fn new(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }
}

#[derive(Deserialize)]
struct ServicePayload {
    success: bool,
    service: Option<ServiceDto>,
}

#[derive(Deserialize)]
struct ServiceDto {
    id: String,
    name: String,
    #[serde(default)]
    price_cents: Option<i64>,
    #[serde(default = "default_advance_days")]
    advance_booking_days: u32,
}

fn default_advance_days() -> u32 {
    DEFAULT_ADVANCE_BOOKING_DAYS
}

#[async_trait]
impl ServiceDirectory for HttpServiceClient {
    async fn fetch_service(&self, service_id: &str) -> Result<Option<ServiceInfo>, WizardError> {
        let url = format!("{}/api/v1/services/{}", self.base_url, service_id);
        let res = self.client.get(&url).send().await?;

        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !res.status().is_success() {
            return Err(WizardError::Api {
                status: res.status().as_u16(),
                message: res.text().await.unwrap_or_default(),
            });
        }

        let payload: ServicePayload = res.json().await?;
        if !payload.success {
            return Err(WizardError::Api {
                status: 200,
                message: "service lookup reported failure".to_string(),
            });
        }

        Ok(payload.service.map(|dto| ServiceInfo {
            id: dto.id,
            name: dto.name,
            price_cents: dto.price_cents,
            advance_booking_days: dto.advance_booking_days,
        }))
    }
}

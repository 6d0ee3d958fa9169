use std::sync::Arc;
use std::time::Duration;
use tracing::info;

use crate::config::Config;
use crate::infra::http::{
    booking_client::HttpBookingClient, calendar_client::HttpCalendarClient,
    messaging_client::HttpMessagingClient, service_client::HttpServiceClient,
};
use crate::state::AppState;

/// Builds the shared HTTP client and wires every port to its reqwest
/// adapter. The request timeout doubles as the availability-fetch timeout:
/// past it the fetch counts as failed and the wizard stays fail-open.
pub fn bootstrap_state(config: &Config) -> AppState {
    info!(
        "Initializing parish API clients for {} (timeout {}ms)",
        config.api_base_url, config.request_timeout_ms
    );

    let client = reqwest::Client::builder()
        .timeout(Duration::from_millis(config.request_timeout_ms))
        .build()
        .expect("Failed to build HTTP client");

    let base_url = config.api_base_url.trim_end_matches('/').to_string();

    AppState {
        config: config.clone(),
        calendar: Arc::new(HttpCalendarClient::new(client.clone(), base_url.clone())),
        services: Arc::new(HttpServiceClient::new(client.clone(), base_url.clone())),
        bookings: Arc::new(HttpBookingClient::new(client.clone(), base_url.clone())),
        conversations: Arc::new(HttpMessagingClient::new(client, base_url)),
    }
}
